//! Error types for the Reviewbell HTTP clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the status endpoint or the
/// messaging API
///
/// Display strings may reach the recipient inside a failure notification.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, timeout, DNS failure and the like
    #[error("Ошибка при запросе к API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status code
    #[error("Эндпоинт недоступен, статус {status}")]
    EndpointUnavailable {
        /// HTTP status code
        status: u16,
        /// Response body, kept for logs
        body: String,
    },

    /// Response body could not be decoded as JSON
    #[error("Ошибка в формате json: {0}")]
    MalformedPayload(String),

    /// Messaging API accepted the request but refused to deliver it
    #[error("Запрос отклонён: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an endpoint error from status code and body
    pub fn endpoint_unavailable(status: u16, body: impl Into<String>) -> Self {
        Self::EndpointUnavailable {
            status,
            body: body.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::EndpointUnavailable { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::EndpointUnavailable { status, .. } if *status >= 500)
    }

    /// Check if the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
