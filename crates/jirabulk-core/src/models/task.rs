//! Task data model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A locally-defined work item mirrored into one Jira issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subtasks: Vec<Subtask>,
}

/// Textual subtask, folded into the parent issue description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    pub summary: String,
    pub description: String,
}

/// Which task list a menu entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCategory {
    Backend,
    Frontend,
}

impl Task {
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            tags: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subtask(mut self, summary: impl Into<String>, description: impl Into<String>) -> Self {
        self.subtasks.push(Subtask {
            summary: summary.into(),
            description: description.into(),
        });
        self
    }

    /// Tags joined for display, e.g. `backend, auth`
    pub fn tag_list(&self) -> String {
        self.tags.join(", ")
    }
}

// `"subtasks": null` reads the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Subtask>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Subtask>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TaskCategory {
    /// Lowercase name used in prompts and log fields
    pub fn name(&self) -> &'static str {
        match self {
            TaskCategory::Backend => "backend",
            TaskCategory::Frontend => "frontend",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskCategory::Backend => write!(f, "Backend"),
            TaskCategory::Frontend => write!(f, "Frontend"),
        }
    }
}
