//! HTTP client for the remote timer service

use std::time::Duration;
use reqwest::Url;
use tracing::{debug, info, warn};

use super::{ClientError, Command, CommandAck, ElapsedResponse};

const ELAPSED_PATH: &str = "/timer/elapsed";

/// Thin wrapper around `reqwest::Client` bound to one service base address
#[derive(Debug, Clone)]
pub struct TimerClient {
    http: reqwest::Client,
    base_url: String,
}

impl TimerClient {
    /// Create a client for `base_url`, optionally bounding every request by `timeout`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::ClientBuild)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Query `GET /timer/elapsed`
    pub async fn fetch_elapsed(&self) -> Result<ElapsedResponse, ClientError> {
        let url = self.url(ELAPSED_PATH);
        let body = self.get_text(&url).await?;

        let response: ElapsedResponse = serde_json::from_str(&body)
            .map_err(|source| ClientError::Malformed { url: url.clone(), source })?;

        debug!(
            "Elapsed: {} running={} seconds={:?}",
            response.elapsed_formatted, response.is_running, response.elapsed_seconds
        );
        Ok(response)
    }

    /// POST a command. The response body is parsed best-effort and never fails the call.
    pub async fn send_command(&self, command: Command) -> Result<CommandAck, ClientError> {
        let url = self.url(command.path());
        debug!("Sending {} command to {}", command, url);

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|source| ClientError::Network { url: url.clone(), source })?;
        let response = check_status(&url, response)?;

        let ack = match response.text().await {
            Ok(body) => CommandAck::from_body(&body),
            Err(e) => {
                debug!("Ignoring unreadable {} response body: {}", command, e);
                CommandAck::default()
            }
        };

        if ack.is_refused() {
            warn!(
                "Service declined {} command: {}",
                command,
                ack.error.as_deref().unwrap_or_default()
            );
        } else {
            info!("{} command accepted", command);
        }
        Ok(ack)
    }

    /// Check that the service root answers with a success status
    pub async fn probe(&self) -> Result<(), ClientError> {
        let url = self.url("/");
        self.get_text(&url).await.map(|_| ())
    }

    async fn get_text(&self, url: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Network { url: url.to_string(), source })?;
        let response = check_status(url, response)?;

        response
            .text()
            .await
            .map_err(|source| ClientError::Network { url: url.to_string(), source })
    }
}

fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Server {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Validate the base address and strip trailing slashes so paths join cleanly
fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed).map_err(|e| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    // Request paths are appended verbatim, so nothing may follow the path
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            message: "query strings and fragments are not allowed".to_string(),
        });
    }

    Ok(trimmed.to_string())
}
