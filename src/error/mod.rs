mod app;
mod config;
mod jtl;
mod notify;
mod source;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use jtl::JtlError;
pub use notify::NotifyError;
pub use source::SourceError;
pub use validation::ValidationError;
