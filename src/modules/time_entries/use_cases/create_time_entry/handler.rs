use std::sync::Arc;

use crate::modules::time_entries::core::payload::{HoursPayload, RemotePayload};
use crate::modules::time_entries::core::transform::{CreatedEntry, transform_entry};
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::remote_api::TimeEntryGateway;

pub struct CreateTimeEntryHandler {
    gateway: Arc<dyn TimeEntryGateway + Send + Sync>,
}

impl CreateTimeEntryHandler {
    pub fn new(gateway: Arc<dyn TimeEntryGateway + Send + Sync>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: CreateTimeEntry) -> Result<CreatedEntry, ApplicationError> {
        let payload = RemotePayload {
            project_id: command.project_id,
            spent_on: command.spent_on,
            time_entry: HoursPayload {
                hours: command.hours,
            },
            comments: command.comments,
            user_id: command.user_id,
        };
        let response = self.gateway.create_time_entry(payload).await?;
        Ok(transform_entry(response))
    }
}
