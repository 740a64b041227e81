use thiserror::Error;

use super::{ConfigError, NotifyError, SourceError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Results source error: {0}")]
    Source(#[from] SourceError),
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn source<E>(error: E) -> Self
    where
        E: Into<SourceError>,
    {
        error.into().into()
    }

    pub fn notify<E>(error: E) -> Self
    where
        E: Into<NotifyError>,
    {
        error.into().into()
    }
}
