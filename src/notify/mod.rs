//! Chat notification rendering and delivery.
mod message;
mod payload;
mod stdout;
mod webhook;

pub use message::{Notification, Outcome, render};
pub use payload::{ChatPayload, MessageOptions};
pub use stdout::StdoutNotifier;
pub use webhook::{NotifierConfig, WebhookNotifier, mask_webhook_url};

use async_trait::async_trait;

use crate::error::AppResult;

/// Delivers a rendered chat payload somewhere.
#[async_trait]
pub trait NotifyPort: Send + Sync {
    /// Sends one payload.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be delivered.
    async fn deliver(&self, payload: &ChatPayload) -> AppResult<()>;
}
