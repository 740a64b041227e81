use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing results file (set --results, JTL_FILE_PATH, or provide in config).")]
    MissingResults,
    #[error("Missing webhook URL (set --webhook-url or SLACK_WEBHOOK_URL).")]
    MissingWebhookUrl,
    #[error("Invalid webhook URL: {source}")]
    InvalidWebhookUrl {
        #[source]
        source: url::ParseError,
    },
    #[error("Webhook URL must use http or https, got '{scheme}'.")]
    UnsupportedWebhookScheme { scheme: String },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
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
