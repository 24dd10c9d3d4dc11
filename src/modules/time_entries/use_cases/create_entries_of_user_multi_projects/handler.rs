use std::sync::Arc;

use crate::modules::time_entries::core::candidate::CandidateEntry;
use crate::modules::time_entries::core::payload::{HoursPayload, RemotePayload};
use crate::modules::time_entries::core::transform::{CreatedEntry, transform_entries};
use crate::modules::time_entries::core::validate::{ValidationErrors, validate_entry_with_project};
use crate::modules::time_entries::submission::pending::PendingSubmissions;
use crate::modules::time_entries::use_cases::create_entries_of_user_multi_projects::command::CreateEntriesOfUserMultiProjects;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::remote_api::TimeEntryGateway;

pub struct CreateEntriesOfUserMultiProjectsHandler {
    gateway: Arc<dyn TimeEntryGateway + Send + Sync>,
}

impl CreateEntriesOfUserMultiProjectsHandler {
    pub fn new(gateway: Arc<dyn TimeEntryGateway + Send + Sync>) -> Self {
        Self { gateway }
    }

    /// Validate entry i, then fire its submission without awaiting it. The
    /// first validation failure aborts the batch; submissions already issued
    /// stay in flight.
    pub async fn handle(
        &self,
        command: CreateEntriesOfUserMultiProjects,
    ) -> Result<Vec<CreatedEntry>, ApplicationError> {
        if command.entries.is_empty() {
            return Err(ApplicationError::Validation(ValidationErrors::single(
                "entries",
                "entries should not be empty",
            )));
        }

        let mut pending = PendingSubmissions::new();
        for entry in command.entries {
            let candidate = CandidateEntry {
                project_id: entry.project_id,
                spent_on: entry.spent_on,
                hours: entry.hours,
                comments: entry.comments,
                ..Default::default()
            };
            let (project_id, fields) =
                validate_entry_with_project(&candidate).map_err(ApplicationError::Validation)?;
            let payload = RemotePayload {
                project_id,
                spent_on: fields.spent_on,
                time_entry: HoursPayload {
                    hours: fields.hours,
                },
                comments: fields.comments,
                user_id: command.user_id,
            };
            pending.submit(self.gateway.clone(), payload);
        }

        let responses = pending.join_all().await?;
        Ok(transform_entries(responses))
    }
}
