//! Status repository
//!
//! Fetches raw status pages from the review status endpoint.

use async_trait::async_trait;
use reviewbell_client::{Result, StatusClient};
use reviewbell_core::domain::Cursor;
use serde_json::Value;

/// Repository trait for the review status endpoint
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches every status change since `cursor`
    ///
    /// Returns the decoded but unvalidated payload. One request per call,
    /// no retry.
    async fn fetch(&self, cursor: Cursor) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: StatusClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP status repository
    pub fn new(client: StatusClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch(&self, cursor: Cursor) -> Result<Value> {
        self.client.fetch_statuses(cursor).await
    }
}
