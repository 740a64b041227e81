use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One recorded request execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sample {
    pub success: bool,
    pub elapsed_ms: u64,
    pub timestamp_ms: i64,
}

impl Sample {
    #[must_use]
    pub const fn new(success: bool, elapsed_ms: u64, timestamp_ms: i64) -> Self {
        Self {
            success,
            elapsed_ms,
            timestamp_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Sniff the first non-whitespace character: `<` means XML.
    #[default]
    Auto,
    Xml,
    Csv,
}

impl LogFormat {
    #[must_use]
    pub fn resolve(self, text: &str) -> Self {
        match self {
            LogFormat::Auto => {
                if text.trim_start().starts_with('<') || text.trim().is_empty() {
                    LogFormat::Xml
                } else {
                    LogFormat::Csv
                }
            }
            LogFormat::Xml | LogFormat::Csv => self,
        }
    }
}
