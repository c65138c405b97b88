//! Reviewbell HTTP Clients
//!
//! Small, type-safe HTTP clients for the two remote services the notifier
//! talks to:
//! - [`StatusClient`]: the review status endpoint, polled with a cursor
//! - [`TelegramClient`]: the Bot API `sendMessage` primitive
//!
//! Neither client retries. Retry policy belongs to the caller.
//!
//! # Example
//!
//! ```no_run
//! use reviewbell_client::StatusClient;
//! use reviewbell_core::domain::Cursor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StatusClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let payload = client.fetch_statuses(Cursor::now()).await?;
//!     println!("{}", payload);
//!     Ok(())
//! }
//! ```

pub mod error;
mod status;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::TelegramClient;

use reqwest::Client;

/// HTTP client for the review status endpoint
#[derive(Clone)]
pub struct StatusClient {
    /// Full endpoint URL (e.g., "https://practicum.yandex.ru/api/user_api/homework_statuses/")
    endpoint: String,
    /// Credential sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl StatusClient {
    /// Create a new status client
    ///
    /// # Arguments
    /// * `endpoint` - The status endpoint URL
    /// * `token` - Static credential for the endpoint
    ///
    /// # Example
    /// ```
    /// use reviewbell_client::StatusClient;
    ///
    /// let client = StatusClient::new("http://localhost:8080/statuses/", "token");
    /// ```
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use reviewbell_client::StatusClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = StatusClient::with_client("http://localhost:8080/statuses/", "token", http_client);
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for StatusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and decode the body as JSON
///
/// Non-success statuses become [`ClientError::EndpointUnavailable`], an
/// undecodable body becomes [`ClientError::MalformedPayload`].
pub(crate) async fn handle_json_response(
    response: reqwest::Response,
) -> Result<serde_json::Value> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::endpoint_unavailable(status.as_u16(), body));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::MalformedPayload(e.to_string()))
}
