use serde::Deserialize;

/// Batch of entries for one user booking time on one project. Both
/// identifiers are fixed for the whole batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateEntriesOfUserPerProject {
    pub project_id: i64,
    pub user_id: i64,
    pub entries: Vec<EntryInput>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryInput {
    pub spent_on: Option<String>,
    pub hours: Option<f64>,
    pub comments: Option<String>,
}
