//! The persistence contract
//!
//! The engine performs no I/O of its own; it defines what it requires from
//! the outside: a single named slot holding the serialized board as text.
//! The owning component reads the slot once at startup and writes it after
//! every accepted state change (last-write-wins - there is only one active
//! session).

use crate::error::Result;
use crate::types::Board;

/// A single-slot blob store for the serialized board.
pub trait BlobStore {
    /// Read the slot; `None` when nothing has been stored yet.
    fn get(&self) -> Result<Option<String>>;

    /// Overwrite the slot.
    fn set(&self, text: &str) -> Result<()>;

    /// Empty the slot.
    fn clear(&self) -> Result<()>;
}

/// Load a board from a store slot, if it holds a usable one.
///
/// Absent, unparseable, or invalid stored state yields `None` - startup
/// falls back to the seeded default rather than failing. An actual store
/// read error is still propagated; only the content being unusable is
/// forgiven.
pub fn load_board(store: &dyn BlobStore) -> Result<Option<Board>> {
    let Some(text) = store.get()? else {
        return Ok(None);
    };
    match Board::from_json(&text) {
        Ok(board) => Ok(Some(board)),
        Err(err) => {
            tracing::warn!(%err, "discarding unusable persisted board state");
            Ok(None)
        }
    }
}

/// Serialize and persist an accepted board.
pub fn save_board(store: &dyn BlobStore, board: &Board) -> Result<()> {
    store.set(&board.to_json_pretty()?)
}

/// Parse an imported file's text into a board, or the violations that got
/// it rejected. The caller's current board is untouched either way.
pub fn import_board(text: &str) -> Result<Board> {
    Board::from_json(text)
}

/// The suggested export file name.
pub const EXPORT_FILE_NAME: &str = "miniloop-board.json";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_board;
    use std::cell::RefCell;

    /// In-memory store used by engine-side tests; file-backed stores live
    /// with the application.
    struct MemoryStore {
        slot: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn empty() -> Self {
            Self {
                slot: RefCell::new(None),
            }
        }

        fn holding(text: &str) -> Self {
            Self {
                slot: RefCell::new(Some(text.to_string())),
            }
        }
    }

    impl BlobStore for MemoryStore {
        fn get(&self) -> Result<Option<String>> {
            Ok(self.slot.borrow().clone())
        }

        fn set(&self, text: &str) -> Result<()> {
            *self.slot.borrow_mut() = Some(text.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::empty();
        let board = seed_board();

        save_board(&store, &board).unwrap();
        let loaded = load_board(&store).unwrap().unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_load_empty_slot_is_none() {
        let store = MemoryStore::empty();
        assert!(load_board(&store).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_slot_is_forgiven() {
        let store = MemoryStore::holding("{{{ not json");
        assert!(load_board(&store).unwrap().is_none());
    }

    #[test]
    fn test_load_structurally_invalid_slot_is_forgiven() {
        let store = MemoryStore::holding(r#"{"columns": {}, "columnOrder": ["ghost"]}"#);
        assert!(load_board(&store).unwrap().is_none());
    }

    #[test]
    fn test_import_rejects_wrong_shape() {
        let err = import_board(r#"{"foo": 1}"#).unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn test_clear_empties_slot() {
        let store = MemoryStore::empty();
        save_board(&store, &seed_board()).unwrap();
        store.clear().unwrap();
        assert!(load_board(&store).unwrap().is_none());
    }
}
