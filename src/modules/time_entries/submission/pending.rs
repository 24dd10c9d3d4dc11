// Per-call set of in-flight submissions.
//
// Purpose
// - Accept submissions incrementally while the dispatcher walks the batch,
//   then join them all exactly once, in enqueue order.
//
// Responsibilities
// - Each submission is a detached tokio task: dropping this collection (or
//   returning early from join_all) stops accepting new work but never cancels
//   work already issued. Remote entries created by sibling tasks stay created
//   even when the batch as a whole reports failure.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::modules::time_entries::core::payload::RemotePayload;
use crate::shared::infrastructure::remote_api::{GatewayError, RemoteTimeEntry, TimeEntryGateway};

#[derive(Default)]
pub struct PendingSubmissions {
    tasks: Vec<JoinHandle<Result<RemoteTimeEntry, GatewayError>>>,
}

impl PendingSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Fire off one submission without waiting for it to complete.
    pub fn submit(
        &mut self,
        gateway: Arc<dyn TimeEntryGateway + Send + Sync>,
        payload: RemotePayload,
    ) {
        self.tasks
            .push(tokio::spawn(async move { gateway.create_time_entry(payload).await }));
    }

    /// Wait for every submission and collect the responses in enqueue order.
    /// The first failure fails the whole aggregate; tasks not yet consumed
    /// keep running to completion.
    pub async fn join_all(self) -> Result<Vec<RemoteTimeEntry>, GatewayError> {
        let mut responses = Vec::with_capacity(self.tasks.len());
        for task in self.tasks {
            let outcome = task
                .await
                .map_err(|e| GatewayError::Transport(format!("submission task aborted: {e}")))?;
            responses.push(outcome?);
        }
        Ok(responses)
    }
}
