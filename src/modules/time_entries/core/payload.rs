use serde::Serialize;

/// Wire-shaped body for `POST time_entries.json`. The remote service expects
/// `hours` nested under a `time_entry` object; everything else is flat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemotePayload {
    pub project_id: i64,
    pub spent_on: String,
    pub time_entry: HoursPayload,
    pub comments: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursPayload {
    pub hours: f64,
}
