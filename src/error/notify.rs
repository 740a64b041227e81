use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to deliver webhook: {source}")]
    Send {
        #[source]
        source: reqwest::Error,
    },
    #[error("Webhook rejected the message with status {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to write message line: {source}")]
    WriteLine {
        #[source]
        source: std::fmt::Error,
    },
    #[error("Failed to serialize payload: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write payload: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}
