use async_trait::async_trait;
use reqwest::Client;

use crate::modules::time_entries::core::payload::RemotePayload;
use crate::shared::infrastructure::remote_api::{
    GatewayError, RemoteTimeEntry, RemoteTimeEntryEnvelope, TimeEntryGateway,
};

/// Remote time tracking service over HTTP. One POST per entry; no retries and
/// no request timeout (a hung remote call holds the batch open).
pub struct HttpRemoteApi {
    client: Client,
    base_url: String,
}

impl HttpRemoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TimeEntryGateway for HttpRemoteApi {
    async fn create_time_entry(
        &self,
        payload: RemotePayload,
    ) -> Result<RemoteTimeEntry, GatewayError> {
        tracing::debug!(
            project_id = payload.project_id,
            user_id = payload.user_id,
            spent_on = %payload.spent_on,
            "submitting time entry"
        );

        let response = self
            .client
            .post(self.endpoint("time_entries.json"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "remote rejected time entry");
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: RemoteTimeEntryEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(envelope.time_entry)
    }
}
