use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::time_entries::core::payload::RemotePayload;
use crate::shared::infrastructure::remote_api::{
    GatewayError, RemoteRef, RemoteTimeEntry, TimeEntryGateway,
};

/// In-memory stand-in for the remote time tracking service. Records every
/// payload it receives and fabricates created-entry bodies that echo the
/// payload fields. Configure failures and delays before sharing it.
pub struct InMemoryRemoteApi {
    submitted: Mutex<Vec<RemotePayload>>,
    next_id: AtomicI64,
    offline: bool,
    rejections: HashMap<i64, (u16, String)>,
    delays_ms: HashMap<i64, u64>,
}

impl Default for InMemoryRemoteApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRemoteApi {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            offline: false,
            rejections: HashMap::new(),
            delays_ms: HashMap::new(),
        }
    }

    /// Every submission fails with a transport error.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Submissions for this user are rejected with the given status and body.
    pub fn reject_user(&mut self, user_id: i64, status: u16, body: impl Into<String>) {
        self.rejections.insert(user_id, (status, body.into()));
    }

    /// Submissions for this user complete only after the given delay.
    pub fn delay_user(&mut self, user_id: i64, delay_ms: u64) {
        self.delays_ms.insert(user_id, delay_ms);
    }

    /// Payloads received so far, in arrival order.
    pub async fn submitted(&self) -> Vec<RemotePayload> {
        self.submitted.lock().await.clone()
    }
}

#[async_trait]
impl TimeEntryGateway for InMemoryRemoteApi {
    async fn create_time_entry(
        &self,
        payload: RemotePayload,
    ) -> Result<RemoteTimeEntry, GatewayError> {
        if self.offline {
            return Err(GatewayError::Transport("remote api offline".to_string()));
        }

        self.submitted.lock().await.push(payload.clone());

        if let Some(delay_ms) = self.delays_ms.get(&payload.user_id) {
            tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
        }

        if let Some((status, body)) = self.rejections.get(&payload.user_id) {
            return Err(GatewayError::Remote {
                status: *status,
                body: body.clone(),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(RemoteTimeEntry {
            id,
            project: RemoteRef {
                id: payload.project_id,
                name: format!("project-{}", payload.project_id),
            },
            user: RemoteRef {
                id: payload.user_id,
                name: format!("user-{}", payload.user_id),
            },
            hours: payload.time_entry.hours,
            comments: payload.comments,
            spent_on: payload.spent_on,
            created_on: None,
        })
    }
}
