use std::sync::Arc;

use crate::modules::time_entries::use_cases::create_entries_of_user_multi_projects::handler::CreateEntriesOfUserMultiProjectsHandler;
use crate::modules::time_entries::use_cases::create_entries_of_user_per_project::handler::CreateEntriesOfUserPerProjectHandler;
use crate::modules::time_entries::use_cases::create_entries_of_users_per_project::handler::CreateEntriesOfUsersPerProjectHandler;
use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::shared::infrastructure::remote_api::TimeEntryGateway;

#[derive(Clone)]
pub struct AppState {
    pub create_time_entry: Arc<CreateTimeEntryHandler>,
    pub entries_of_user_per_project: Arc<CreateEntriesOfUserPerProjectHandler>,
    pub entries_of_user_multi_projects: Arc<CreateEntriesOfUserMultiProjectsHandler>,
    pub entries_of_users_per_project: Arc<CreateEntriesOfUsersPerProjectHandler>,
}

impl AppState {
    pub fn with_gateway(gateway: Arc<dyn TimeEntryGateway + Send + Sync>) -> Self {
        Self {
            create_time_entry: Arc::new(CreateTimeEntryHandler::new(gateway.clone())),
            entries_of_user_per_project: Arc::new(CreateEntriesOfUserPerProjectHandler::new(
                gateway.clone(),
            )),
            entries_of_user_multi_projects: Arc::new(CreateEntriesOfUserMultiProjectsHandler::new(
                gateway.clone(),
            )),
            entries_of_users_per_project: Arc::new(CreateEntriesOfUsersPerProjectHandler::new(
                gateway,
            )),
        }
    }
}
