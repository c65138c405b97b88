//! Telegram Bot API client

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::handle_json_response;

/// Default Bot API base URL
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Minimal Bot API client that can send text messages
///
/// The bot token is part of every request URL, so transport errors are
/// stripped of their URL before being returned.
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    token: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    /// Create a client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_API_URL, token, Client::new())
    }

    /// Create a client against a custom Bot API URL with a configured HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send one text message to a chat
    ///
    /// Exactly one request per call, no retry.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;

        let body = handle_json_response(response).await.map_err(|e| match e {
            ClientError::Transport(e) => ClientError::Transport(e.without_url()),
            other => other,
        })?;

        if body.get("ok").and_then(|ok| ok.as_bool()) != Some(true) {
            let description = body
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or("unknown error")
                .to_string();
            return Err(ClientError::Rejected(description));
        }

        Ok(())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}
