//! Domain types and pure view logic for taskio.

/// Calendar-date helpers and wire format.
pub mod date;
/// Search/filter query descriptor.
pub mod filters;
/// Task identifier type.
pub mod id;
/// Workflow status enumeration.
pub mod status;
/// Sort/group view projection.
pub mod view;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

use crate::id::TaskId;
use crate::status::TaskStatus;

/// Maximum length of a task title, in characters.
pub const TITLE_MAX: usize = 100;
/// Maximum length of a task description, in characters.
pub const DESCRIPTION_MAX: usize = 500;

/// A unit of work tracked on the remote service.
///
/// Tasks are immutable values: an edit produces a new `Task` sent wholesale
/// to the server, never a partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier; absent until the task is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Human-readable title.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Optional due date (calendar date, no time component).
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::date::option")]
    pub due_date: Option<Date>,
    /// Optional free-text category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Task {
    /// Label substituted for tasks without a category.
    pub const UNCATEGORIZED: &'static str = "Uncategorized";

    /// Category label, falling back to [`Self::UNCATEGORIZED`].
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(Self::UNCATEGORIZED)
    }

    /// Validate the user-editable fields against the service limits.
    ///
    /// # Errors
    /// Returns an error if the title is blank after trimming or any field
    /// exceeds its length limit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        let title_len = self.title.chars().count();
        if title_len > TITLE_MAX {
            return Err(ValidationError::TitleTooLong { len: title_len });
        }
        if let Some(description) = &self.description {
            let len = description.chars().count();
            if len > DESCRIPTION_MAX {
                return Err(ValidationError::DescriptionTooLong { len });
            }
        }
        Ok(())
    }
}

/// Violations of the task field constraints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace-only.
    #[error("title must not be blank")]
    BlankTitle,
    /// Title exceeds [`TITLE_MAX`] characters.
    #[error("title is {len} characters, the limit is {TITLE_MAX}")]
    TitleTooLong {
        /// Offending length.
        len: usize,
    },
    /// Description exceeds [`DESCRIPTION_MAX`] characters.
    #[error("description is {len} characters, the limit is {DESCRIPTION_MAX}")]
    DescriptionTooLong {
        /// Offending length.
        len: usize,
    },
}
