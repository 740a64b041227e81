use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_value;
use crate::error::{ConfigError, ValidationError};
use crate::jtl::LogFormat;
use crate::metrics::ReportMode;
use crate::notify::MessageOptions;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub results: Option<String>,
    pub jmx: Option<String>,
    pub test_plan: Option<String>,
    pub mode: Option<ReportMode>,
    pub format: Option<LogFormat>,
    pub webhook_url: Option<String>,
    pub timeout: Option<DurationValue>,
    pub dry_run: Option<bool>,
    pub print_summary: Option<bool>,
    pub message: Option<MessageOptions>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> Result<Duration, ConfigError> {
        let parsed = match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        };
        parsed.map_err(|err| ConfigError::InvalidDuration { field, source: err })
    }
}
