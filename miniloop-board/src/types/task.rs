//! Task types: Task, Subtask, Comment, Priority

use super::ids::{CommentId, SubtaskId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, ordered from least to most urgent.
///
/// Serialized as the variant name (`"None"`, `"Low"`, ...) - the names are
/// part of the board file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities, in ascending order
    pub fn all() -> [Priority; 4] {
        [Self::None, Self::Low, Self::Medium, Self::High]
    }

    /// Display label (same as the serialized name)
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A checklist item owned by a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    /// Create a new incomplete subtask
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: SubtaskId::new(),
            text: text.into(),
            completed: false,
        }
    }
}

/// A comment on a task - part of the discussion thread
///
/// Comments are append-only from the UI's perspective; the timestamp is
/// fixed at creation and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A task/card on the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Task {
    /// Create a new task with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            priority: Priority::None,
            subtasks: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the subtask list
    pub fn with_subtasks(mut self, subtasks: Vec<Subtask>) -> Self {
        self.subtasks = subtasks;
        self
    }

    /// Count of (completed, total) subtasks.
    ///
    /// Derived on demand, never stored.
    pub fn subtask_counts(&self) -> (usize, usize) {
        let completed = self.subtasks.iter().filter(|s| s.completed).count();
        (completed, self.subtasks.len())
    }

    /// Progress as the fraction of completed subtasks.
    ///
    /// Returns 0.0 for a task with no subtasks.
    pub fn progress(&self) -> f64 {
        let (completed, total) = self.subtask_counts();
        if total == 0 {
            return 0.0;
        }
        completed as f64 / total as f64
    }

    /// Find a subtask by ID
    pub fn find_subtask(&self, id: &SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| &s.id == id)
    }

    /// Find a comment by ID
    pub fn find_comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }
}
