use crate::{
    config::Config,
    constants::{CHAT_ENDPOINT, GENERIC_FAILURE_TEXT},
    errors::{ChatError, ChatResult},
};
use reqwest::Client;
use serde_json::{json, Value};
use std::future::Future;
use std::time::{Duration, Instant};

/// What the tracker endpoint said about one submitted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    /// `success: true` with a reply payload.
    Reply(String),
    /// `success: false`; carries the server-provided failure text.
    Rejected(String),
}

/// Transport seam for the controller. Errors from `send` are transport
/// failures; application-level failures come back as `BotReply::Rejected`.
pub trait ChatApi {
    fn send(&self, message: &str) -> impl Future<Output = ChatResult<BotReply>> + Send;
}

/// reqwest-backed client for the `/api/chat/` endpoint.
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    client: Client,
    base_url: String,
}

impl HttpChatApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ChatResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::api_error(format!("failed to build http client: {e}")))?;
        Ok(HttpChatApi {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> ChatResult<Self> {
        HttpChatApi::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_ENDPOINT)
    }
}

impl ChatApi for HttpChatApi {
    async fn send(&self, message: &str) -> ChatResult<BotReply> {
        let url = self.endpoint();
        let payload = json!({ "message": message });
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChatError::api_error(format!("request failed: {e}")))?;

        // The endpoint reports application failures in the body with a
        // non-2xx status; the body is authoritative either way, so the
        // status is only recorded for diagnostics.
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| ChatError::api_error(format!("malformed response ({status}): {e}")))?;

        log::info!(
            "POST {} -> {} in {}ms",
            url,
            status,
            started.elapsed().as_millis()
        );

        decode_reply(&body)
    }
}

/// Decodes the `{success, data | message | errors}` wire shape. Failure
/// text priority: `message`, then the joined `errors` list, then the
/// generic fallback; empty candidates fall through like JS falsiness did
/// in the original widget.
pub fn decode_reply(body: &Value) -> ChatResult<BotReply> {
    match body["success"].as_bool() {
        Some(true) => body["data"]
            .as_str()
            .map(|text| BotReply::Reply(text.to_string()))
            .ok_or_else(|| ChatError::api_error("success response missing data field")),
        Some(false) => {
            let text = body["message"]
                .as_str()
                .map(str::to_string)
                .filter(|m| !m.is_empty())
                .or_else(|| {
                    body["errors"].as_array().map(|errors| {
                        errors
                            .iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                })
                .filter(|joined| !joined.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_TEXT.to_string());
            Ok(BotReply::Rejected(text))
        }
        None => Err(ChatError::api_error("response missing success flag")),
    }
}
