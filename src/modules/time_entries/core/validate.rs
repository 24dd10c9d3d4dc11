// Pure validation of one candidate entry against its batch variant's schema.
//
// Purpose
// - Check each field locally and return either the parsed values or the full
//   set of field-level violations for this candidate.
//
// Responsibilities
// - spent_on must parse as a calendar date; hours must be a positive number;
//   comments must be present and non-empty; the varying identifier of the
//   schema (project_id or user_id) must be a positive integer.
// - Never perform input or output. No cross-item checks.

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::time_entries::core::candidate::CandidateEntry;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn single(field: &'static str, message: &str) -> Self {
        Self {
            violations: vec![FieldViolation {
                field,
                messages: vec![message.to_string()],
            }],
        }
    }
}

/// Shared fields every schema validates, parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFields {
    pub spent_on: String,
    pub hours: f64,
    pub comments: String,
}

/// Schema for batches where both project and user are fixed for the whole
/// batch: only the shared fields are on the entry.
pub fn validate_entry(candidate: &CandidateEntry) -> Result<ValidFields, ValidationErrors> {
    let mut violations = Vec::new();
    let fields = shared_fields(candidate, &mut violations);
    match fields {
        Some(fields) => Ok(fields),
        None => Err(ValidationErrors { violations }),
    }
}

/// Schema for batches where the project varies per entry.
pub fn validate_entry_with_project(
    candidate: &CandidateEntry,
) -> Result<(i64, ValidFields), ValidationErrors> {
    let mut violations = Vec::new();
    let project_id = id_field("project_id", candidate.project_id, &mut violations);
    let fields = shared_fields(candidate, &mut violations);
    match (project_id, fields) {
        (Some(project_id), Some(fields)) => Ok((project_id, fields)),
        _ => Err(ValidationErrors { violations }),
    }
}

/// Schema for batches where the user varies per entry.
pub fn validate_entry_with_user(
    candidate: &CandidateEntry,
) -> Result<(i64, ValidFields), ValidationErrors> {
    let mut violations = Vec::new();
    let user_id = id_field("user_id", candidate.user_id, &mut violations);
    let fields = shared_fields(candidate, &mut violations);
    match (user_id, fields) {
        (Some(user_id), Some(fields)) => Ok((user_id, fields)),
        _ => Err(ValidationErrors { violations }),
    }
}

fn shared_fields(
    candidate: &CandidateEntry,
    violations: &mut Vec<FieldViolation>,
) -> Option<ValidFields> {
    let spent_on = date_field("spent_on", candidate.spent_on.as_deref(), violations);
    let hours = hours_field("hours", candidate.hours, violations);
    let comments = text_field("comments", candidate.comments.as_deref(), violations);
    Some(ValidFields {
        spent_on: spent_on?,
        hours: hours?,
        comments: comments?,
    })
}

fn date_field(
    field: &'static str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let Some(value) = value else {
        push(violations, field, &format!("{field} is required"));
        return None;
    };
    if NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
        push(
            violations,
            field,
            &format!("{field} must be a valid calendar date"),
        );
        return None;
    }
    Some(value.to_string())
}

fn hours_field(
    field: &'static str,
    value: Option<f64>,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Some(value) = value else {
        push(violations, field, &format!("{field} is required"));
        return None;
    };
    if !value.is_finite() || value <= 0.0 {
        push(
            violations,
            field,
            &format!("{field} must be a positive number"),
        );
        return None;
    }
    Some(value)
}

fn text_field(
    field: &'static str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let Some(value) = value else {
        push(violations, field, &format!("{field} is required"));
        return None;
    };
    if value.is_empty() {
        push(violations, field, &format!("{field} should not be empty"));
        return None;
    }
    Some(value.to_string())
}

fn id_field(
    field: &'static str,
    value: Option<i64>,
    violations: &mut Vec<FieldViolation>,
) -> Option<i64> {
    let Some(value) = value else {
        push(violations, field, &format!("{field} is required"));
        return None;
    };
    if value <= 0 {
        push(
            violations,
            field,
            &format!("{field} must be a positive integer"),
        );
        return None;
    }
    Some(value)
}

fn push(violations: &mut Vec<FieldViolation>, field: &'static str, message: &str) {
    violations.push(FieldViolation {
        field,
        messages: vec![message.to_string()],
    });
}
