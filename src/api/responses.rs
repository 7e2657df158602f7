//! API response structures

use serde::{Deserialize, Serialize};

/// Body of `GET /timer/elapsed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElapsedResponse {
    /// `HH:MM:SS`, displayed verbatim
    pub elapsed_formatted: String,
    pub is_running: bool,
    /// Raw seconds; only used for debug logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
}

/// Best-effort view of a command response body.
///
/// The service answers refused commands (e.g. start while running) with a
/// 2xx status and an `error` field, so this is informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAck {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CommandAck {
    /// Parse a command body, falling back to an empty ack when it is not JSON
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Whether the service declined the command
    pub fn is_refused(&self) -> bool {
        self.error.is_some()
    }
}
