use serde::Serialize;

use crate::shared::infrastructure::remote_api::RemoteTimeEntry;

/// Caller-facing representation of one created entry, flattened from the
/// remote body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedEntry {
    pub id: i64,
    pub project_id: i64,
    pub project_name: String,
    pub user_id: i64,
    pub spent_on: String,
    pub hours: f64,
    pub comments: String,
}

pub fn transform_entry(response: RemoteTimeEntry) -> CreatedEntry {
    CreatedEntry {
        id: response.id,
        project_id: response.project.id,
        project_name: response.project.name,
        user_id: response.user.id,
        spent_on: response.spent_on,
        hours: response.hours,
        comments: response.comments,
    }
}

/// Pure mapping over the aggregated responses; order is preserved.
pub fn transform_entries(responses: Vec<RemoteTimeEntry>) -> Vec<CreatedEntry> {
    responses.into_iter().map(transform_entry).collect()
}
