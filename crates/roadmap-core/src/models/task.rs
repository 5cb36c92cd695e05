//! Task model definition and the set of editable task fields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One actionable step of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Short title of the task
    pub title: String,

    /// Markdown body, possibly using the `Resource: Name - URL` convention
    #[serde(default)]
    pub content: String,

    /// Optional duration label (only present when a timeline was requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Completion flag; absent until explicitly set on a persisted goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Task {
    /// Whether the task has been marked complete. An absent flag counts as
    /// not complete.
    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }

    /// The duration label, treating an empty string as absent.
    pub fn duration_label(&self) -> Option<&str> {
        self.duration.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Read the current value of an editable field.
    pub fn field(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Content => &self.content,
            TaskField::Duration => self.duration.as_deref().unwrap_or(""),
        }
    }

    /// Overwrite one editable field, leaving every other field untouched.
    pub fn set_field(&mut self, field: TaskField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TaskField::Title => self.title = value,
            TaskField::Content => self.content = value,
            TaskField::Duration => self.duration = Some(value),
        }
    }
}

/// The text fields of a task that can be edited individually.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskField {
    /// The task title
    Title,
    /// The markdown body
    Content,
    /// The duration label
    Duration,
}

impl FromStr for TaskField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(TaskField::Title),
            "content" => Ok(TaskField::Content),
            "duration" => Ok(TaskField::Duration),
            _ => Err(format!("Invalid task field: {s}")),
        }
    }
}

impl TaskField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Title => "title",
            TaskField::Content => "content",
            TaskField::Duration => "duration",
        }
    }
}
