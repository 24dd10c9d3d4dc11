use serde::Deserialize;

/// Batch of entries for several users booking time on one project. The
/// project is fixed for the whole batch; the user varies per entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateEntriesOfUsersPerProject {
    pub project_id: i64,
    pub entries: Vec<UserEntryInput>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserEntryInput {
    pub user_id: Option<i64>,
    pub spent_on: Option<String>,
    pub hours: Option<f64>,
    pub comments: Option<String>,
}
