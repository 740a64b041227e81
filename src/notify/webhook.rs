use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, AppResult, NotifyError};

use super::NotifyPort;
use super::payload::ChatPayload;

const USER_AGENT: &str = concat!("jtl-report/", env!("CARGO_PKG_VERSION"));
/// Replacement for each path segment when a webhook URL is logged.
const MASKED_SEGMENT: &str = "/***";
/// Longest response body kept in a rejection error.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Where and how to deliver notifications. Passed in at call time; nothing
/// about the webhook is global.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub webhook_url: Url,
    pub timeout: Duration,
}

/// Posts payloads as JSON to an incoming webhook.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: Url,
}

impl WebhookNotifier {
    /// Builds the HTTP client for the configured webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &NotifierConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| AppError::notify(NotifyError::BuildClient { source: err }))?;
        tracing::debug!(
            "Webhook URL length: {}, pattern: {}",
            config.webhook_url.as_str().len(),
            mask_webhook_url(&config.webhook_url)
        );
        Ok(Self {
            client,
            url: config.webhook_url.clone(),
        })
    }
}

#[async_trait]
impl NotifyPort for WebhookNotifier {
    async fn deliver(&self, payload: &ChatPayload) -> AppResult<()> {
        tracing::debug!("Sending payload to {}", mask_webhook_url(&self.url));
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                AppError::notify(NotifyError::Send {
                    source: err.without_url(),
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Webhook rejected the message with status {}", status);
            return Err(AppError::notify(NotifyError::Rejected {
                status,
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            }));
        }

        tracing::info!("Notification delivered ({}).", status);
        Ok(())
    }
}

/// Webhook URL safe for logs: scheme, host and port survive, every path
/// segment is masked and the query is dropped.
#[must_use]
pub fn mask_webhook_url(url: &Url) -> String {
    let port = url.port().map(|port| format!(":{}", port)).unwrap_or_default();
    let segments = url
        .path_segments()
        .map(|segments| segments.filter(|segment| !segment.is_empty()).count())
        .unwrap_or(0);
    format!(
        "{}://{}{}{}",
        url.scheme(),
        url.host_str().unwrap_or_default(),
        port,
        MASKED_SEGMENT.repeat(segments)
    )
}
