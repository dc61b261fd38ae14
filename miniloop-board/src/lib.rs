//! Kanban board state engine
//!
//! This crate is the single source of truth for a board: columns in a
//! visible order, tasks inside columns, subtasks and comments inside tasks.
//! Every mutation is a pure state transition - an operation takes the
//! current [`Board`] by value and returns the next one. Operations never
//! fail for well-formed input: a stale or unresolvable reference returns
//! the board unchanged, so callers can feed it raw drag-and-drop events
//! without pre-checking anything.
//!
//! ## Basic Usage
//!
//! ```rust
//! use miniloop_board::{Board, TaskDraft};
//!
//! let board = Board::new();
//! let board = board.add_column("To Do");
//! let column_id = board.column_order()[0].clone();
//!
//! let board = board.add_task(&column_id, TaskDraft::new("Ship the release"));
//! assert_eq!(board.task_count(), 1);
//! ```
//!
//! ## Consistency
//!
//! The board's central invariant is bidirectional: every id in the column
//! order has a matching column entry and vice versa, with no duplicates,
//! and every task lives in exactly one column. Engine operations preserve
//! it; externally supplied boards (loaded files, imports) must pass
//! [`Board::validate`] before they are adopted via [`Board::adopt`].
//!
//! Persistence is the caller's job: the engine only defines the
//! [`store::BlobStore`] contract (one named slot of serialized text) and
//! the JSON wire format (`Board::to_json_pretty` / `Board::from_json`).

pub mod defaults;
pub mod draft;
mod engine;
mod error;
pub mod reorder;
pub mod store;
pub mod types;
pub mod validate;

pub use draft::{SubtaskDraft, TaskDraft};
pub use error::{BoardError, Result};
pub use store::BlobStore;
pub use types::{
    Board, Column, ColumnId, Comment, CommentId, Priority, Subtask, SubtaskId, Task, TaskId,
};
pub use validate::{ValidationError, Violation};
