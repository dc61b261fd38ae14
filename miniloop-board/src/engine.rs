//! Board engine: pure state transitions
//!
//! Every operation takes the current board by value and returns the next
//! one. Operations are total: a reference to something that no longer
//! exists (a stale drag target, an already-deleted task) returns the board
//! unchanged. That race between UI event latency and state changes is
//! expected, so rejections are quiet - at most a debug trace.

use crate::draft::TaskDraft;
use crate::reorder::{array_move, insert_clamped};
use crate::types::{Board, Column, ColumnId, SubtaskId, TaskId};

/// A resolved drop target for a task move.
enum DropTarget {
    /// Hovering a task: insert at that task's current index in its column
    Task(ColumnId, TaskId),
    /// Hovering a column body: append at the end of that column
    Column(ColumnId),
}

impl Board {
    /// Relocate `active` to the position currently held by `over` in the
    /// visible column order. Unknown ids and self-moves are no-ops.
    pub fn move_column(mut self, active: &ColumnId, over: &ColumnId) -> Board {
        if active == over {
            return self;
        }
        let from = self.column_order.iter().position(|id| id == active);
        let to = self.column_order.iter().position(|id| id == over);
        match (from, to) {
            (Some(from), Some(to)) => {
                array_move(&mut self.column_order, from, to);
                self
            }
            _ => {
                tracing::debug!(%active, %over, "move_column target not on board");
                self
            }
        }
    }

    /// Move a task to wherever `over` points.
    ///
    /// `over` is the opaque id under the pointer when the drag ended. It is
    /// resolved here: another task (reorder within the column, or insert at
    /// that task's index in its column), or a column id (append at the end
    /// of that column - the empty-column drop). Anything else, or an
    /// `active` that is no longer on the board, leaves the board unchanged.
    pub fn move_task(mut self, active: &TaskId, over: &str) -> Board {
        if active.as_str() == over {
            return self;
        }
        let Some(source_id) = self.column_of_task(active).cloned() else {
            tracing::debug!(%active, "move_task source task not on board");
            return self;
        };

        let over_task = TaskId::from_string(over);
        let target = if let Some(dest_id) = self.column_of_task(&over_task).cloned() {
            DropTarget::Task(dest_id, over_task)
        } else {
            let column_id = ColumnId::from_string(over);
            if self.columns.contains_key(&column_id) {
                DropTarget::Column(column_id)
            } else {
                tracing::debug!(over, "move_task target is neither task nor column");
                return self;
            }
        };

        match target {
            DropTarget::Task(dest_id, over_task) if dest_id == source_id => {
                // Same column: conventional single-element reorder.
                if let Some(column) = self.columns.get_mut(&source_id) {
                    if let (Some(from), Some(to)) =
                        (column.task_index(active), column.task_index(&over_task))
                    {
                        array_move(&mut column.tasks, from, to);
                    }
                }
                self
            }
            DropTarget::Task(dest_id, over_task) => {
                // Cross column: the insertion index is the hovered task's
                // index in the destination list, which removal from the
                // separate source list does not shift.
                self.transfer_task(active, &source_id, &dest_id, Some(&over_task))
            }
            DropTarget::Column(dest_id) => self.transfer_task(active, &source_id, &dest_id, None),
        }
    }

    /// Detach `task_id` from `source_id` and insert it into `dest_id`: at
    /// `before`'s current index when given, else at the end. Source and
    /// destination may be the same column (drop on the own column body).
    fn transfer_task(
        mut self,
        task_id: &TaskId,
        source_id: &ColumnId,
        dest_id: &ColumnId,
        before: Option<&TaskId>,
    ) -> Board {
        let Some(task) = self.find_task(task_id).cloned() else {
            return self;
        };
        if let Some(source) = self.columns.get_mut(source_id) {
            source.tasks.retain(|t| &t.id != task_id);
        }
        if let Some(dest) = self.columns.get_mut(dest_id) {
            let index = before
                .and_then(|id| dest.task_index(id))
                .unwrap_or(usize::MAX);
            insert_clamped(&mut dest.tasks, index, task);
        }
        self
    }

    /// Append a new task built from `draft` to the named column.
    ///
    /// The engine assigns the fresh id. A missing column is a caller
    /// contract violation and a defensive no-op, as is a draft with a
    /// blank title.
    pub fn add_task(mut self, column_id: &ColumnId, draft: TaskDraft) -> Board {
        if !draft.is_confirmable() {
            return self;
        }
        match self.columns.get_mut(column_id) {
            Some(column) => {
                column.tasks.push(draft.into_task());
                self
            }
            None => {
                tracing::debug!(%column_id, "add_task into unknown column");
                self
            }
        }
    }

    /// Replace the task with `updated.id` wholesale, wherever it lives.
    pub fn update_task(mut self, updated: crate::types::Task) -> Board {
        for column in self.columns.values_mut() {
            if let Some(index) = column.task_index(&updated.id) {
                column.tasks[index] = updated;
                return self;
            }
        }
        self
    }

    /// Remove the task from whichever column contains it.
    pub fn delete_task(mut self, id: &TaskId) -> Board {
        for column in self.columns.values_mut() {
            if let Some(index) = column.task_index(id) {
                column.tasks.remove(index);
                return self;
            }
        }
        self
    }

    /// Append a new empty column with the given title.
    pub fn add_column(mut self, title: impl Into<String>) -> Board {
        let column = Column::new(title);
        self.column_order.push(column.id.clone());
        self.columns.insert(column.id.clone(), column);
        self
    }

    /// Set the column's title to the trimmed `new_title`, only when that is
    /// non-empty and actually different. Invalid edits are ignored, not
    /// errors: the old title silently stays.
    pub fn rename_column(mut self, id: &ColumnId, new_title: &str) -> Board {
        let trimmed = new_title.trim();
        if let Some(column) = self.columns.get_mut(id) {
            if !trimmed.is_empty() && trimmed != column.title {
                column.title = trimmed.to_string();
            }
        }
        self
    }

    /// Remove the column and every task it owns.
    pub fn delete_column(mut self, id: &ColumnId) -> Board {
        self.columns.shift_remove(id);
        self.column_order.retain(|c| c != id);
        self
    }

    /// Flip the completed flag of one subtask. Unknown task or subtask ids
    /// are no-ops.
    pub fn toggle_subtask(mut self, task_id: &TaskId, subtask_id: &SubtaskId) -> Board {
        for column in self.columns.values_mut() {
            if let Some(index) = column.task_index(task_id) {
                if let Some(subtask) = column.tasks[index]
                    .subtasks
                    .iter_mut()
                    .find(|s| &s.id == subtask_id)
                {
                    subtask.completed = !subtask.completed;
                }
                return self;
            }
        }
        self
    }
}
