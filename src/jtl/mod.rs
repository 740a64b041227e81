//! Results-log extraction: turns JTL text (XML or CSV) into ordered samples.
mod delimited;
pub mod lenient;
mod types;
mod xml;


pub use types::{LogFormat, Sample};

use crate::error::JtlError;

/// Written by some exporters ahead of the first character.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses a results log into samples, preserving log order. A leading
/// byte order mark is ignored.
///
/// # Errors
///
/// Returns an error when the text is not structurally valid for the
/// selected format. Malformed individual fields never fail the parse.
pub fn parse_samples(text: &str, format: LogFormat) -> Result<Vec<Sample>, JtlError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    match format.resolve(text) {
        LogFormat::Csv => delimited::parse_csv(text),
        LogFormat::Xml | LogFormat::Auto => xml::parse_xml(text),
    }
}
