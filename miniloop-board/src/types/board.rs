//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named, ordered bucket of tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create a new empty column with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Number of tasks in this column
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Index of a task within this column's list
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Find a task by ID
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }
}

/// The complete board state: all columns plus their visible order.
///
/// `columns` is keyed by column id; iteration order of the map carries no
/// meaning - `column_order` alone defines the visible arrangement. The two
/// must stay bidirectionally consistent (see [`crate::validate`]), and every
/// engine operation preserves that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub columns: IndexMap<ColumnId, Column>,
    #[serde(rename = "columnOrder")]
    pub column_order: Vec<ColumnId>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
            column_order: Vec::new(),
        }
    }

    /// The visible column order
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Columns in visible order
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.values().map(|c| c.tasks.len()).sum()
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Find the id of the column that owns the given task
    pub fn column_of_task(&self, id: &TaskId) -> Option<&ColumnId> {
        self.columns
            .iter()
            .find(|(_, col)| col.tasks.iter().any(|t| &t.id == id))
            .map(|(col_id, _)| col_id)
    }

    /// Find a task anywhere on the board
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.columns.values().find_map(|c| c.find_task(id))
    }

    /// Serialize to pretty-printed JSON (the board file format)
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
