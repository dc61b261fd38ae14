//! Draft payloads produced by the add/edit workflow
//!
//! An editing session (a modal form, a CLI invocation) collects a complete
//! draft and confirms it in one shot; the engine then accepts the built
//! task atomically. Subtasks whose text trims to empty are filtered out at
//! this boundary - they exist transiently while the user is typing, never
//! on the board.

use crate::types::{Comment, Priority, Subtask, SubtaskId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A subtask as collected by the editor: existing subtasks keep their id,
/// freshly added rows get one at build time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubtaskDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SubtaskId>,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl SubtaskDraft {
    /// A fresh, unchecked subtask row
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            completed: false,
        }
    }

    /// A draft row for an existing subtask
    pub fn existing(subtask: &Subtask) -> Self {
        Self {
            id: Some(subtask.id.clone()),
            text: subtask.text.clone(),
            completed: subtask.completed,
        }
    }
}

/// Everything the add/edit workflow collects for one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub subtasks: Vec<SubtaskDraft>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl TaskDraft {
    /// Start a draft with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::None,
            subtasks: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Prefill a draft from an existing task (edit mode)
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            subtasks: task.subtasks.iter().map(SubtaskDraft::existing).collect(),
            comments: task.comments.clone(),
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

    /// Append a subtask row
    pub fn with_subtask(mut self, text: impl Into<String>) -> Self {
        self.subtasks.push(SubtaskDraft::new(text));
        self
    }

    /// A draft confirms only with a non-empty trimmed title
    pub fn is_confirmable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Append a comment to the thread; blank comments are ignored
    pub fn add_comment(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.comments.push(Comment::new(text));
    }

    /// Build a brand-new task (fresh id) from this draft
    pub fn into_task(self) -> Task {
        self.build(TaskId::new())
    }

    /// Build the replacement for an existing task, preserving its id
    pub fn apply_to(self, existing: &Task) -> Task {
        self.build(existing.id.clone())
    }

    fn build(self, id: TaskId) -> Task {
        let subtasks = self
            .subtasks
            .into_iter()
            .filter(|s| !s.text.trim().is_empty())
            .map(|s| Subtask {
                id: s.id.unwrap_or_default(),
                text: s.text,
                completed: s.completed,
            })
            .collect();

        Task {
            id,
            title: self.title,
            description: self.description.filter(|d| !d.trim().is_empty()),
            priority: self.priority,
            subtasks,
            comments: self.comments,
        }
    }
}
