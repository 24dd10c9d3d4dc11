use serde::Deserialize;

/// Batch of entries for one user booking time across several projects. The
/// user is fixed for the whole batch; the project varies per entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateEntriesOfUserMultiProjects {
    pub user_id: i64,
    pub entries: Vec<ProjectEntryInput>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectEntryInput {
    pub project_id: Option<i64>,
    pub spent_on: Option<String>,
    pub hours: Option<f64>,
    pub comments: Option<String>,
}
