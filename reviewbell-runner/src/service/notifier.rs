//! Notifier service
//!
//! Delivers messages to the single configured recipient.

use async_trait::async_trait;
use reviewbell_client::TelegramClient;
use tracing::debug;

use crate::error::DeliveryError;

/// Service trait for delivering messages to the recipient
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends exactly one message
    ///
    /// No retry and no batching; the caller owns retry policy.
    async fn deliver(&self, message: &str) -> Result<(), DeliveryError>;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to one chat
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Recipient of every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, message: &str) -> Result<(), DeliveryError> {
        self.client
            .send_message(&self.chat_id, message)
            .await
            .map_err(|source| DeliveryError {
                message: message.to_string(),
                source,
            })?;

        debug!("Message delivered to chat {}", self.chat_id);
        Ok(())
    }
}
