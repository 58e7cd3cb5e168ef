//! Outbound endpoint seam.
//!
//! `Endpoint` is the only way anything leaves the process. The production
//! implementation talks to the Telegram Bot API; tests swap in stubs that
//! time out, reject, or record call windows.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::error::SendError;

/// One-shot send of a payload to a chat, bounded by `timeout`.
///
/// Implementations classify failures: `SendError::Timeout` is the only
/// retryable kind, anything else terminates the delivery.
#[async_trait]
pub trait Endpoint: Send + Sync {
    async fn send(&self, chat_id: i64, payload: &str, timeout: Duration)
    -> Result<(), SendError>;
}

/// Telegram Bot API endpoint (`sendMessage`).
pub struct TelegramEndpoint {
    bot_token: SecretString,
    base_url: String,
    client: reqwest::Client,
}

impl TelegramEndpoint {
    pub fn new(bot_token: SecretString) -> Self {
        Self::with_base_url(bot_token, "https://api.telegram.org".to_string())
    }

    /// Endpoint against a non-default API host. Used by tests; also the
    /// hook for a local Bot API server deployment.
    pub fn with_base_url(bot_token: SecretString, base_url: String) -> Self {
        Self {
            bot_token,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.base_url,
            self.bot_token.expose_secret()
        )
    }
}

#[async_trait]
impl Endpoint for TelegramEndpoint {
    async fn send(
        &self,
        chat_id: i64,
        payload: &str,
        timeout: Duration,
    ) -> Result<(), SendError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": payload,
        });

        let resp = self
            .client
            .post(self.api_url("sendMessage"))
            .timeout(timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SendError::Timeout(timeout)
                } else {
                    SendError::Transport(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // The Bot API can answer 200 with ok=false; treat that — and any
        // unparseable body — as a rejection, not a transport hiccup.
        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SendError::Rejected {
                status: status.as_u16(),
                body: format!("malformed response: {e}"),
            })?;
        match data.get("ok").and_then(serde_json::Value::as_bool) {
            Some(true) => Ok(()),
            _ => Err(SendError::Rejected {
                status: status.as_u16(),
                body: data.to_string(),
            }),
        }
    }
}
