//! Structural validation of externally-supplied boards
//!
//! Any board that did not come out of an engine operation - parsed from
//! storage, imported from a file - must pass through here before it
//! replaces the live board. Validation is a parse step with a typed
//! failure: it returns every violated invariant, not just the first, and a
//! failed candidate is rejected in its entirety with no partial merge.

use crate::error::{BoardError, Result};
use crate::types::Board;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A single violated board invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// `columnOrder` references a column id with no entry in `columns`
    #[error("columnOrder references unknown column: {id}")]
    UnknownColumnInOrder { id: String },

    /// A `columns` entry does not appear in `columnOrder`
    #[error("column missing from columnOrder: {id}")]
    ColumnMissingFromOrder { id: String },

    /// A column id appears more than once in `columnOrder`
    #[error("duplicate column in columnOrder: {id}")]
    DuplicateColumnInOrder { id: String },

    /// A column's map key disagrees with its own id field
    #[error("column keyed as '{key}' carries id '{id}'")]
    ColumnKeyMismatch { key: String, id: String },

    /// A task id appears in more than one place on the board
    #[error("duplicate task id: {id}")]
    DuplicateTaskId { id: String },

    /// A subtask id appears more than once within one task
    #[error("duplicate subtask id '{id}' in task {task}")]
    DuplicateSubtaskId { task: String, id: String },

    /// A comment id appears more than once within one task
    #[error("duplicate comment id '{id}' in task {task}")]
    DuplicateCommentId { task: String, id: String },
}

/// A rejected candidate board, carrying every violated invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// The individual violations, in discovery order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board ({} violations)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "\n  - {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl Board {
    /// Check the board's structural invariants, collecting all violations.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut violations = Vec::new();

        let mut seen_order: HashSet<&str> = HashSet::new();
        for id in &self.column_order {
            if !seen_order.insert(id.as_str()) {
                violations.push(Violation::DuplicateColumnInOrder {
                    id: id.to_string(),
                });
            }
            if !self.columns.contains_key(id) {
                violations.push(Violation::UnknownColumnInOrder { id: id.to_string() });
            }
        }

        let mut seen_tasks: HashSet<&str> = HashSet::new();
        for (key, column) in &self.columns {
            if key != &column.id {
                violations.push(Violation::ColumnKeyMismatch {
                    key: key.to_string(),
                    id: column.id.to_string(),
                });
            }
            if !self.column_order.contains(key) {
                violations.push(Violation::ColumnMissingFromOrder {
                    id: key.to_string(),
                });
            }

            for task in &column.tasks {
                if !seen_tasks.insert(task.id.as_str()) {
                    violations.push(Violation::DuplicateTaskId {
                        id: task.id.to_string(),
                    });
                }

                let mut seen_subtasks: HashSet<&str> = HashSet::new();
                for subtask in &task.subtasks {
                    if !seen_subtasks.insert(subtask.id.as_str()) {
                        violations.push(Violation::DuplicateSubtaskId {
                            task: task.id.to_string(),
                            id: subtask.id.to_string(),
                        });
                    }
                }

                let mut seen_comments: HashSet<&str> = HashSet::new();
                for comment in &task.comments {
                    if !seen_comments.insert(comment.id.as_str()) {
                        violations.push(Violation::DuplicateCommentId {
                            task: task.id.to_string(),
                            id: comment.id.to_string(),
                        });
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    /// Parse a board from JSON text and validate it.
    ///
    /// The two top-level fields `columns` and `columnOrder` are required;
    /// anything structurally inconsistent is rejected wholesale. On any
    /// error the caller keeps whatever board it already has.
    pub fn from_json(text: &str) -> Result<Board> {
        let board: Board =
            serde_json::from_str(text).map_err(|e| BoardError::parse(e.to_string()))?;
        board.validate()?;
        Ok(board)
    }

    /// Wholesale board replacement, used by load-from-file and reset.
    ///
    /// Validates the candidate and hands it back for adoption. On
    /// rejection the caller's current board - which was never passed in -
    /// stays untouched.
    pub fn adopt(candidate: Board) -> std::result::Result<Board, ValidationError> {
        match candidate.validate() {
            Ok(()) => Ok(candidate),
            Err(err) => {
                tracing::debug!(violations = err.violations().len(), "rejected candidate board");
                Err(err)
            }
        }
    }
}
