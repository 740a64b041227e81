use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::lenient::{parse_elapsed_ms, parse_success, parse_timestamp_ms};
use super::types::Sample;
use crate::error::JtlError;

/// Root element JMeter writes for XML results.
const RESULTS_ROOT: &[u8] = b"testResults";
/// Sample elements read directly under the root. Sub-samples nested inside
/// them are part of their parent's timing and are not counted again.
const SAMPLE_ELEMENTS: [&[u8]; 2] = [b"httpSample", b"sample"];
/// Depth of sample elements below the document root.
const SAMPLE_DEPTH: usize = 1;

#[derive(Default)]
struct DocumentState {
    depth: usize,
    seen_root: bool,
    in_results: bool,
}

impl DocumentState {
    fn open(&mut self, element: &BytesStart<'_>, samples: &mut Vec<Sample>) -> Result<(), JtlError> {
        let name = element.name();
        if self.depth == 0 {
            if self.seen_root {
                return Err(JtlError::MultipleRoots);
            }
            self.seen_root = true;
            self.in_results = name.as_ref() == RESULTS_ROOT;
        } else if self.in_results
            && self.depth == SAMPLE_DEPTH
            && SAMPLE_ELEMENTS.contains(&name.as_ref())
        {
            samples.push(read_sample(element)?);
        }
        Ok(())
    }
}

pub(super) fn parse_xml(text: &str) -> Result<Vec<Sample>, JtlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut samples = Vec::new();
    let mut state = DocumentState::default();

    loop {
        let event = reader
            .read_event()
            .map_err(|err| JtlError::Xml { source: err })?;
        match event {
            Event::Start(element) => {
                state.open(&element, &mut samples)?;
                state.depth = state.depth.saturating_add(1);
            }
            Event::Empty(element) => {
                state.open(&element, &mut samples)?;
            }
            Event::End(_) => {
                state.depth = state.depth.saturating_sub(1);
            }
            Event::Text(content) => {
                if state.depth == 0 && !content.iter().all(u8::is_ascii_whitespace) {
                    return Err(JtlError::TextOutsideRoot);
                }
            }
            Event::CData(_) => {
                if state.depth == 0 {
                    return Err(JtlError::TextOutsideRoot);
                }
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if state.depth > 0 {
        return Err(JtlError::UnclosedElements { open: state.depth });
    }
    if !state.seen_root {
        return Err(JtlError::MissingRoot);
    }
    Ok(samples)
}

fn read_sample(element: &BytesStart<'_>) -> Result<Sample, JtlError> {
    let mut success = None;
    let mut elapsed = None;
    let mut timestamp = None;

    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| JtlError::XmlAttribute { source: err })?;
        let slot = match attribute.key.as_ref() {
            b"s" => &mut success,
            b"t" => &mut elapsed,
            b"ts" => &mut timestamp,
            _ => continue,
        };
        let value = attribute
            .unescape_value()
            .map_err(|err| JtlError::Xml { source: err })?;
        *slot = Some(value.into_owned());
    }

    Ok(Sample {
        success: parse_success(success.as_deref()),
        elapsed_ms: parse_elapsed_ms(elapsed.as_deref()),
        timestamp_ms: parse_timestamp_ms(timestamp.as_deref()),
    })
}
