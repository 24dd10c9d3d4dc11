use axum::{Router, routing::post};

use crate::modules::time_entries::use_cases::create_entries_of_user_multi_projects::inbound::http as multi_projects_http;
use crate::modules::time_entries::use_cases::create_entries_of_user_per_project::inbound::http as user_per_project_http;
use crate::modules::time_entries::use_cases::create_entries_of_users_per_project::inbound::http as users_per_project_http;
use crate::modules::time_entries::use_cases::create_time_entry::inbound::http as create_entry_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create-time-entry", post(create_entry_http::handle))
        .route(
            "/create-time-entries-of-user-per-project",
            post(user_per_project_http::handle),
        )
        .route(
            "/create-time-entries-of-user-multi-projects",
            post(multi_projects_http::handle),
        )
        .route(
            "/create-time-entries-of-users-per-project",
            post(users_per_project_http::handle),
        )
        .with_state(state)
}
