// Normalized per-item record extracted from a batch element.
//
// Purpose
// - Carry exactly the fields the validator looks at, independent of which
//   batch variant produced them.
//
// Responsibilities
// - Every field is optional: presence is a validation rule, not a
//   deserialization rule. Created transiently per iteration, never persisted.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateEntry {
    pub project_id: Option<i64>,
    pub user_id: Option<i64>,
    pub spent_on: Option<String>,
    pub hours: Option<f64>,
    pub comments: Option<String>,
}
