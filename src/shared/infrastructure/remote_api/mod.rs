// Outbound port for the remote time tracking service.
//
// Purpose
// - Describe the one capability the batch pipeline needs from the outside
//   world: creating a single time entry remotely.
//
// Boundaries
// - No concrete input or output here. Adapters implement the trait in the
//   submodules below.
//
// Testing guidance
// - Use the in_memory adapter; it records every payload it receives and can
//   inject transport failures, remote rejections, and per-user delays.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::modules::time_entries::core::payload::RemotePayload;

pub mod http;
pub mod in_memory;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("remote service responded with status {status}")]
    Remote { status: u16, body: String },
}

/// Created-entry body returned by the remote service. The wire shape nests it
/// under a `time_entry` envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteTimeEntry {
    pub id: i64,
    pub project: RemoteRef,
    pub user: RemoteRef,
    pub hours: f64,
    pub comments: String,
    pub spent_on: String,
    pub created_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoteTimeEntryEnvelope {
    pub time_entry: RemoteTimeEntry,
}

#[async_trait]
pub trait TimeEntryGateway: Send + Sync {
    /// One independent request per entry; no retries, no batching at the
    /// transport level.
    async fn create_time_entry(
        &self,
        payload: RemotePayload,
    ) -> Result<RemoteTimeEntry, GatewayError>;
}
