//! The seeded default board
//!
//! Used when no persisted state exists (first launch) and by the reset
//! action. The content mirrors the product's starter board; ids are
//! generated fresh every time, so two seeds are never id-equal.

use crate::draft::{SubtaskDraft, TaskDraft};
use crate::types::{Board, Priority};

/// Build the starter board: three columns with a few sample tasks.
pub fn seed_board() -> Board {
    let board = Board::new()
        .add_column("To Do")
        .add_column("In Progress")
        .add_column("Done");
    let todo = board.column_order()[0].clone();
    let doing = board.column_order()[1].clone();
    let done = board.column_order()[2].clone();

    let mut palette = SubtaskDraft::new("Choose color palette");
    palette.completed = true;

    let mut design = TaskDraft::new("Design the noir theme UI").with_priority(Priority::High);
    design.subtasks = vec![palette, SubtaskDraft::new("Select fonts")];

    board
        .add_task(&todo, design)
        .add_task(
            &todo,
            TaskDraft::new("Implement drag and drop functionality").with_priority(Priority::High),
        )
        .add_task(
            &doing,
            TaskDraft::new("Develop the main App component")
                .with_description("Setup state management and local storage")
                .with_priority(Priority::Medium),
        )
        .add_task(
            &done,
            TaskDraft::new("Setup project structure").with_priority(Priority::Low),
        )
}
