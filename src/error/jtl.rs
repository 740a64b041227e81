use thiserror::Error;

/// Raised when a results log is not structurally valid.
///
/// Individual malformed fields never produce this error; they fall back to
/// the lenient defaults in `jtl::lenient`.
#[derive(Debug, Error)]
pub enum JtlError {
    #[error("Malformed XML: {source}")]
    Xml {
        #[source]
        source: quick_xml::Error,
    },
    #[error("Malformed XML attribute: {source}")]
    XmlAttribute {
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },
    #[error("XML document has no root element.")]
    MissingRoot,
    #[error("XML document has more than one root element.")]
    MultipleRoots,
    #[error("XML document has text outside the root element.")]
    TextOutsideRoot,
    #[error("XML document ended with {open} unclosed element(s).")]
    UnclosedElements { open: usize },
    #[error("Malformed CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
