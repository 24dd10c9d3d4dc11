// Shared builders for batch commands. The users-per-project builder loads its
// baseline from a JSON file in the transport shape; the entry builders start
// from an in-code baseline and expose removers for the optional fields.

use std::fs;

use crate::modules::time_entries::use_cases::create_entries_of_user_multi_projects::command::ProjectEntryInput;
use crate::modules::time_entries::use_cases::create_entries_of_user_per_project::command::EntryInput;
use crate::modules::time_entries::use_cases::create_entries_of_users_per_project::command::{
    CreateEntriesOfUsersPerProject, UserEntryInput,
};

pub struct CreateEntriesOfUsersPerProjectBuilder {
    inner: CreateEntriesOfUsersPerProject,
}

impl Default for CreateEntriesOfUsersPerProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEntriesOfUsersPerProjectBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(
            "./src/tests/fixtures/commands/json/create_entries_of_users_per_project.json",
        )
        .unwrap();
        let inner: CreateEntriesOfUsersPerProject = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn project_id(mut self, v: i64) -> Self {
        self.inner.project_id = v;
        self
    }

    pub fn entries(mut self, v: Vec<UserEntryInput>) -> Self {
        self.inner.entries = v;
        self
    }

    pub fn build(self) -> CreateEntriesOfUsersPerProject {
        self.inner
    }
}

pub struct UserEntryInputBuilder {
    inner: UserEntryInput,
}

impl Default for UserEntryInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserEntryInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: UserEntryInput {
                user_id: Some(12),
                spent_on: Some("2026-08-03".to_string()),
                hours: Some(2.0),
                comments: Some("daily standup".to_string()),
            },
        }
    }

    pub fn user_id(mut self, v: i64) -> Self {
        self.inner.user_id = Some(v);
        self
    }

    pub fn no_user_id(mut self) -> Self {
        self.inner.user_id = None;
        self
    }

    pub fn spent_on(mut self, v: impl Into<String>) -> Self {
        self.inner.spent_on = Some(v.into());
        self
    }

    pub fn no_spent_on(mut self) -> Self {
        self.inner.spent_on = None;
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = Some(v);
        self
    }

    pub fn no_hours(mut self) -> Self {
        self.inner.hours = None;
        self
    }

    pub fn comments(mut self, v: impl Into<String>) -> Self {
        self.inner.comments = Some(v.into());
        self
    }

    pub fn no_comments(mut self) -> Self {
        self.inner.comments = None;
        self
    }

    pub fn build(self) -> UserEntryInput {
        self.inner
    }
}

pub struct EntryInputBuilder {
    inner: EntryInput,
}

impl Default for EntryInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntryInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: EntryInput {
                spent_on: Some("2026-08-03".to_string()),
                hours: Some(2.0),
                comments: Some("daily standup".to_string()),
            },
        }
    }

    pub fn spent_on(mut self, v: impl Into<String>) -> Self {
        self.inner.spent_on = Some(v.into());
        self
    }

    pub fn no_spent_on(mut self) -> Self {
        self.inner.spent_on = None;
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = Some(v);
        self
    }

    pub fn no_hours(mut self) -> Self {
        self.inner.hours = None;
        self
    }

    pub fn comments(mut self, v: impl Into<String>) -> Self {
        self.inner.comments = Some(v.into());
        self
    }

    pub fn no_comments(mut self) -> Self {
        self.inner.comments = None;
        self
    }

    pub fn build(self) -> EntryInput {
        self.inner
    }
}

pub struct ProjectEntryInputBuilder {
    inner: ProjectEntryInput,
}

impl Default for ProjectEntryInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProjectEntryInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: ProjectEntryInput {
                project_id: Some(7),
                spent_on: Some("2026-08-03".to_string()),
                hours: Some(2.0),
                comments: Some("daily standup".to_string()),
            },
        }
    }

    pub fn project_id(mut self, v: i64) -> Self {
        self.inner.project_id = Some(v);
        self
    }

    pub fn no_project_id(mut self) -> Self {
        self.inner.project_id = None;
        self
    }

    pub fn spent_on(mut self, v: impl Into<String>) -> Self {
        self.inner.spent_on = Some(v.into());
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = Some(v);
        self
    }

    pub fn no_hours(mut self) -> Self {
        self.inner.hours = None;
        self
    }

    pub fn comments(mut self, v: impl Into<String>) -> Self {
        self.inner.comments = Some(v.into());
        self
    }

    pub fn build(self) -> ProjectEntryInput {
        self.inner
    }
}

#[cfg(test)]
mod command_builders_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_json_baseline() {
        let command = CreateEntriesOfUsersPerProjectBuilder::new().build();
        assert_eq!(command.project_id, 7);
        assert_eq!(command.entries.len(), 2);
        assert_eq!(command.entries[0].user_id, Some(12));
        assert_eq!(command.entries[1].user_id, Some(13));
    }

    #[rstest]
    fn it_should_override_the_baseline_entries() {
        let command = CreateEntriesOfUsersPerProjectBuilder::new()
            .project_id(9)
            .entries(vec![UserEntryInputBuilder::new().user_id(40).build()])
            .build();
        assert_eq!(command.project_id, 9);
        assert_eq!(command.entries.len(), 1);
        assert_eq!(command.entries[0].user_id, Some(40));
    }

    #[rstest]
    fn it_should_remove_optional_fields() {
        let entry = UserEntryInputBuilder::new()
            .no_user_id()
            .no_spent_on()
            .no_hours()
            .no_comments()
            .build();
        assert_eq!(entry, UserEntryInput {
            user_id: None,
            spent_on: None,
            hours: None,
            comments: None,
        });
    }
}
