//! Application state: the single live board plus its storage side channel
//!
//! All mutation flows through the engine's pure transitions; this is the
//! one place that owns the resulting value and the one place that talks to
//! storage. Persistence is a side effect applied after each accepted
//! transition - never implicit, never concurrent.

use crate::store::FileStore;
use miniloop_board::defaults::seed_board;
use miniloop_board::store::{load_board, save_board};
use miniloop_board::{Board, Result, ValidationError};

/// Owns the in-memory board and writes it through to the store.
pub struct AppState {
    board: Board,
    store: FileStore,
}

impl AppState {
    /// Load the persisted board, falling back to the seeded default when
    /// the slot is empty or unusable. The starting board is persisted
    /// immediately so a fresh install has a slot from the first run.
    pub fn open(store: FileStore) -> Result<Self> {
        let board = match load_board(&store)? {
            Some(board) => board,
            None => {
                tracing::info!("no usable persisted board, seeding default");
                let board = seed_board();
                save_board(&store, &board)?;
                board
            }
        };
        Ok(Self { board, store })
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run one engine transition. When it changed the board, the new value
    /// is persisted and `true` is returned; a no-op leaves storage alone.
    pub fn apply<F>(&mut self, op: F) -> Result<bool>
    where
        F: FnOnce(Board) -> Board,
    {
        let next = op(self.board.clone());
        if next == self.board {
            return Ok(false);
        }
        save_board(&self.store, &next)?;
        self.board = next;
        Ok(true)
    }

    /// Adopt an externally-supplied board (import). A rejected candidate
    /// leaves the current board and storage untouched; the violations are
    /// returned for display.
    pub fn replace_board(
        &mut self,
        candidate: Board,
    ) -> Result<std::result::Result<(), ValidationError>> {
        match Board::adopt(candidate) {
            Ok(board) => {
                save_board(&self.store, &board)?;
                self.board = board;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    /// Throw the current board away and reseed.
    pub fn reset(&mut self) -> Result<()> {
        let board = seed_board();
        save_board(&self.store, &board)?;
        self.board = board;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniloop_board::{ColumnId, TaskDraft};
    use tempfile::TempDir;

    fn open_state(temp: &TempDir) -> AppState {
        AppState::open(FileStore::new(temp.path().join("board.json"))).unwrap()
    }

    #[test]
    fn test_first_open_seeds_and_persists() {
        let temp = TempDir::new().unwrap();
        let state = open_state(&temp);
        assert_eq!(state.board().task_count(), 4);
        assert!(temp.path().join("board.json").exists());
    }

    #[test]
    fn test_accepted_mutation_is_persisted() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);
        let column = state.board().column_order()[0].clone();

        let changed = state
            .apply(|b| b.add_task(&column, TaskDraft::new("persist me")))
            .unwrap();
        assert!(changed);

        // A second session sees the write
        let reopened = open_state(&temp);
        assert_eq!(reopened.board(), state.board());
        assert_eq!(reopened.board().task_count(), 5);
    }

    #[test]
    fn test_noop_reports_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);

        let changed = state
            .apply(|b| b.add_task(&ColumnId::from_string("gone"), TaskDraft::new("t")))
            .unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_seed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        std::fs::write(&path, "{{{ corrupt").unwrap();

        let state = AppState::open(FileStore::new(&path)).unwrap();
        assert_eq!(state.board().column_count(), 3);
    }

    #[test]
    fn test_rejected_import_keeps_current_board() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);
        let before = state.board().clone();

        let mut bad = Board::new();
        bad.column_order.push(ColumnId::from_string("ghost"));
        let outcome = state.replace_board(bad).unwrap();

        assert!(outcome.is_err());
        assert_eq!(state.board(), &before);

        // Storage untouched too
        let reopened = open_state(&temp);
        assert_eq!(reopened.board(), &before);
    }

    #[test]
    fn test_accepted_import_replaces_board() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);

        let incoming = Board::new().add_column("Only");
        state.replace_board(incoming.clone()).unwrap().unwrap();
        assert_eq!(state.board(), &incoming);
    }

    #[test]
    fn test_reset_reseeds() {
        let temp = TempDir::new().unwrap();
        let mut state = open_state(&temp);
        let column = state.board().column_order()[0].clone();
        state
            .apply(|b| b.add_task(&column, TaskDraft::new("extra")))
            .unwrap();

        state.reset().unwrap();
        assert_eq!(state.board().task_count(), 4);
    }
}
