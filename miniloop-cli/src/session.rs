//! Add/edit sessions
//!
//! A session collects a complete draft and then talks to the engine at
//! most once: confirming performs exactly one call, cancelling performs
//! none, and deleting the task from inside an edit session deletes and
//! closes as a single user action. The engine only ever sees fully-formed
//! payloads.

use crate::state::AppState;
use miniloop_board::{ColumnId, Result, TaskDraft, TaskId};

enum Mode {
    Add { column: ColumnId },
    Edit { task: TaskId },
}

/// One open add/edit workflow over a task draft.
pub struct EditSession {
    mode: Mode,
    pub draft: TaskDraft,
}

impl EditSession {
    /// Start adding a new task to the given column.
    pub fn add(column: ColumnId, draft: TaskDraft) -> Self {
        Self {
            mode: Mode::Add { column },
            draft,
        }
    }

    /// Start editing an existing task, prefilled from its current state.
    /// `None` when the task is not on the board.
    pub fn edit(state: &AppState, task_id: &TaskId) -> Option<Self> {
        let task = state.board().find_task(task_id)?;
        Some(Self {
            mode: Mode::Edit {
                task: task_id.clone(),
            },
            draft: TaskDraft::from_task(task),
        })
    }

    /// Confirm the session: one engine call. Returns whether the board
    /// changed - a blank title or a task deleted meanwhile saves nothing.
    pub fn confirm(self, state: &mut AppState) -> Result<bool> {
        if !self.draft.is_confirmable() {
            return Ok(false);
        }
        let draft = self.draft;
        match self.mode {
            Mode::Add { column } => state.apply(|b| b.add_task(&column, draft)),
            Mode::Edit { task } => state.apply(move |b| {
                let updated = b.find_task(&task).map(|existing| draft.apply_to(existing));
                match updated {
                    Some(updated) => b.update_task(updated),
                    None => b,
                }
            }),
        }
    }

    /// Close without saving. Zero engine calls.
    pub fn cancel(self) {}

    /// Delete the task being edited and close the session in one motion.
    /// In add mode there is nothing to delete.
    pub fn delete_task(self, state: &mut AppState) -> Result<bool> {
        match self.mode {
            Mode::Edit { task } => state.apply(|b| b.delete_task(&task)),
            Mode::Add { .. } => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FileStore;
    use miniloop_board::Priority;
    use tempfile::TempDir;

    fn open_state(temp: &TempDir) -> AppState {
        AppState::open(FileStore::new(temp.path().join("board.json"))).unwrap()
    }

    #[test]
    fn test_confirm_add_creates_one_task() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);
        let column = state.board().column_order()[0].clone();

        let draft = TaskDraft::new("From session")
            .with_priority(Priority::Low)
            .with_subtask("step one")
            .with_subtask("   ");
        let changed = EditSession::add(column, draft).confirm(&mut state).unwrap();

        assert!(changed);
        assert_eq!(state.board().task_count(), 5);
        let task = state
            .board()
            .ordered_columns()
            .next()
            .unwrap()
            .tasks
            .last()
            .unwrap();
        assert_eq!(task.title, "From session");
        // The blank subtask row was filtered at the session boundary
        assert_eq!(task.subtasks.len(), 1);
    }

    #[test]
    fn test_cancel_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let state = open_state(&temp);
        let before = state.board().clone();
        let column = state.board().column_order()[0].clone();

        let session = EditSession::add(column, TaskDraft::new("Never saved"));
        session.cancel();

        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_blank_title_refuses_to_confirm() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);
        let before = state.board().clone();
        let column = state.board().column_order()[0].clone();

        let changed = EditSession::add(column, TaskDraft::new("  "))
            .confirm(&mut state)
            .unwrap();

        assert!(!changed);
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_edit_session_updates_in_place() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);
        let task_id = state.board().ordered_columns().next().unwrap().tasks[0]
            .id
            .clone();

        let mut session = EditSession::edit(&state, &task_id).unwrap();
        session.draft.title = "Edited title".into();
        session.draft.add_comment("first comment");
        let changed = session.confirm(&mut state).unwrap();

        assert!(changed);
        let task = state.board().find_task(&task_id).unwrap();
        assert_eq!(task.title, "Edited title");
        assert_eq!(task.comments.len(), 1);
        assert_eq!(state.board().task_count(), 4);
    }

    #[test]
    fn test_edit_session_for_unknown_task_does_not_open() {
        let temp = TempDir::new().unwrap();
        let state = open_state(&temp);
        assert!(EditSession::edit(&state, &TaskId::from_string("gone")).is_none());
    }

    #[test]
    fn test_delete_from_edit_session_removes_and_closes() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);
        let task_id = state.board().ordered_columns().next().unwrap().tasks[0]
            .id
            .clone();

        let session = EditSession::edit(&state, &task_id).unwrap();
        let changed = session.delete_task(&mut state).unwrap();

        assert!(changed);
        assert!(state.board().find_task(&task_id).is_none());
        assert_eq!(state.board().task_count(), 3);
    }
}
