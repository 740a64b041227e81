use serde::{Deserialize, Serialize};

/// Incoming-webhook body understood by Slack and compatible chat services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
}

/// Optional per-message overrides applied on top of the webhook defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageOptions {
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
}
