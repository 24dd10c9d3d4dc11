use serde::Deserialize;

/// One fully-specified time entry. Unlike the batch operations this shape is
/// not run through the field validator; the body types are required instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateTimeEntry {
    pub project_id: i64,
    pub user_id: i64,
    pub spent_on: String,
    pub hours: f64,
    pub comments: String,
}
