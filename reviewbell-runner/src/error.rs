//! Poll cycle errors

use reviewbell_client::ClientError;
use reviewbell_core::ValidationError;
use thiserror::Error;

/// Everything that can make a poll cycle fail
///
/// Display is what the recipient sees after the failure prefix, so it is
/// forwarded unchanged from the underlying error.
#[derive(Debug, Error)]
pub enum PollError {
    /// Fetching from the status endpoint failed
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// The payload or the reported record did not have the expected shape
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PollError {
    /// Short classification used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(ClientError::Transport(_)) => "transport",
            Self::Fetch(ClientError::EndpointUnavailable { .. }) => "endpoint_unavailable",
            Self::Fetch(ClientError::MalformedPayload(_)) => "malformed_payload",
            Self::Fetch(ClientError::Rejected(_)) => "rejected",
            Self::Validation(ValidationError::Schema(_)) => "schema",
            Self::Validation(ValidationError::MissingCursor) => "missing_cursor",
            Self::Validation(ValidationError::MissingField(_)) => "missing_field",
            Self::Validation(ValidationError::UnknownStatus(_)) => "unknown_status",
        }
    }

    /// Text of the notification sent to the recipient for this failure
    pub fn notification(&self) -> String {
        format!("Сбой в работе программы: {}", self)
    }
}

/// A message could not be delivered to the recipient
#[derive(Debug, Error)]
#[error("Ошибка отправки сообщения {message:?}: {source}")]
pub struct DeliveryError {
    /// Text that was not delivered
    pub message: String,
    /// Underlying messaging client failure
    #[source]
    pub source: ClientError,
}
