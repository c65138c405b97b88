//! Status endpoint calls

use reviewbell_core::domain::Cursor;
use tracing::debug;

use crate::StatusClient;
use crate::error::Result;
use crate::handle_json_response;

impl StatusClient {
    /// Fetch every status change since `cursor`
    ///
    /// Sends `GET <endpoint>?from_date=<cursor>` with the credential in the
    /// `Authorization` header. The decoded body is returned as is;
    /// structural checks are the caller's job.
    ///
    /// # Errors
    /// * [`ClientError::Transport`](crate::ClientError::Transport) - the request failed
    /// * [`ClientError::EndpointUnavailable`](crate::ClientError::EndpointUnavailable) - non-success status
    /// * [`ClientError::MalformedPayload`](crate::ClientError::MalformedPayload) - body is not JSON
    pub async fn fetch_statuses(&self, cursor: Cursor) -> Result<serde_json::Value> {
        debug!("Requesting statuses from {} (from_date={})", self.endpoint, cursor);

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", cursor.value())])
            .send()
            .await?;

        handle_json_response(response).await
    }
}
