//! Validation errors for status endpoint payloads and records

use thiserror::Error;

/// Result type alias for validation and formatting
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while interpreting a decoded status endpoint payload
///
/// Display strings end up in the failure notification sent to the
/// recipient, so they are written in the recipient's language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Payload or one of its parts has the wrong JSON type
    #[error("Некорректная структура ответа API: {0}")]
    Schema(String),

    /// The server did not return a cursor
    #[error("В ответе API отсутствует ключ current_date")]
    MissingCursor,

    /// A required key is absent
    #[error("Отсутствует ожидаемый ключ \"{0}\" в ответе API")]
    MissingField(&'static str),

    /// Status code not present in the lexicon
    #[error("Неизвестный статус работы {0}")]
    UnknownStatus(String),
}

impl ValidationError {
    pub fn schema(detail: impl Into<String>) -> Self {
        Self::Schema(detail.into())
    }
}
