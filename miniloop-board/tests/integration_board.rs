//! End-to-end board engine tests: long mutation sequences, serialization
//! round-trips, and adoption of externally-supplied boards.

use miniloop_board::defaults::seed_board;
use miniloop_board::{Board, ColumnId, Priority, TaskDraft, TaskId};

fn first_task_of(board: &Board, column_index: usize) -> TaskId {
    let column_id = &board.column_order()[column_index];
    board.find_column(column_id).unwrap().tasks[0].id.clone()
}

fn task_named(board: &Board, title: &str) -> TaskId {
    board
        .ordered_columns()
        .flat_map(|c| &c.tasks)
        .find(|t| t.title == title)
        .map(|t| t.id.clone())
        .unwrap()
}

#[test]
fn test_arbitrary_mutation_sequence_stays_consistent() {
    let mut board = seed_board();
    let todo = board.column_order()[0].clone();
    let doing = board.column_order()[1].clone();

    // A plausible session: add, move around, edit, toggle, delete.
    board = board.add_task(
        &todo,
        TaskDraft::new("Write release notes")
            .with_priority(Priority::Medium)
            .with_subtask("Draft")
            .with_subtask("Proofread"),
    );
    let notes = task_named(&board, "Write release notes");
    let drag_and_drop = task_named(&board, "Implement drag and drop functionality");

    board = board.move_task(&notes, doing.as_str());
    board = board.move_task(&drag_and_drop, notes.as_str());
    board = board.move_column(&doing, &todo);
    board = board.delete_task(&notes);
    board = board.add_column("Blocked");
    let blocked = board.column_order().last().unwrap().clone();
    board = board.rename_column(&blocked, "On Hold");

    board.validate().expect("board must stay consistent");
    assert_eq!(board.column_count(), 4);
    assert_eq!(board.task_count(), 4);
}

#[test]
fn test_serialize_round_trip_after_mutations() {
    let board = seed_board().add_column("Review");
    let todo = board.column_order()[0].clone();
    let review = board.column_order().last().unwrap().clone();
    let task = first_task_of(&board, 0);

    let board = board
        .move_task(&task, review.as_str())
        .rename_column(&todo, "Backlog");

    let json = board.to_json_pretty().unwrap();
    let restored = Board::from_json(&json).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn test_adopting_valid_export_replaces_board() {
    let exported = seed_board();
    let json = exported.to_json_pretty().unwrap();

    let candidate = Board::from_json(&json).unwrap();
    let adopted = Board::adopt(candidate).unwrap();
    assert_eq!(adopted, exported);
}

#[test]
fn test_import_of_garbage_leaves_caller_board_intact() {
    let current = seed_board();

    // Neither parse failures nor structural failures disturb `current`;
    // the engine never saw it.
    assert!(Board::from_json(r#"{"foo": 1}"#).is_err());
    assert!(Board::from_json("]").is_err());

    current.validate().unwrap();
    assert_eq!(current.task_count(), 4);
}

#[test]
fn test_cross_column_insert_index_ignores_source_removal() {
    // Column X = [x1, x2, x3], column Y = [y1]. Moving y1 onto x3 must
    // land it at x3's index in X, unaffected by Y shrinking.
    let board = Board::new().add_column("X").add_column("Y");
    let x = board.column_order()[0].clone();
    let y = board.column_order()[1].clone();
    let board = board
        .add_task(&x, TaskDraft::new("x1"))
        .add_task(&x, TaskDraft::new("x2"))
        .add_task(&x, TaskDraft::new("x3"))
        .add_task(&y, TaskDraft::new("y1"));

    let x3 = board.find_column(&x).unwrap().tasks[2].id.clone();
    let y1 = board.find_column(&y).unwrap().tasks[0].id.clone();

    let board = board.move_task(&y1, x3.as_str());

    let titles: Vec<&str> = board
        .find_column(&x)
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, ["x1", "x2", "y1", "x3"]);
    assert!(board.find_column(&y).unwrap().tasks.is_empty());
    board.validate().unwrap();
}

#[test]
fn test_column_mapping_order_is_irrelevant_to_equality_semantics() {
    // Two serializations that differ only in the columns map's key order
    // parse to boards with the same visible arrangement.
    let json_a = r#"{
        "columns": {
            "a": {"id": "a", "title": "A", "tasks": []},
            "b": {"id": "b", "title": "B", "tasks": []}
        },
        "columnOrder": ["b", "a"]
    }"#;
    let json_b = r#"{
        "columns": {
            "b": {"id": "b", "title": "B", "tasks": []},
            "a": {"id": "a", "title": "A", "tasks": []}
        },
        "columnOrder": ["b", "a"]
    }"#;

    let a = Board::from_json(json_a).unwrap();
    let b = Board::from_json(json_b).unwrap();

    let visible_a: Vec<&str> = a.ordered_columns().map(|c| c.title.as_str()).collect();
    let visible_b: Vec<&str> = b.ordered_columns().map(|c| c.title.as_str()).collect();
    assert_eq!(visible_a, visible_b);
    assert_eq!(visible_a, ["B", "A"]);
}

#[test]
fn test_stale_drag_targets_after_deletion_are_noops() {
    let board = seed_board();
    let todo = board.column_order()[0].clone();
    let victim = first_task_of(&board, 0);

    // The UI might still fire a drag-end for a task deleted mid-gesture.
    let board = board.delete_task(&victim);
    let after = board
        .clone()
        .move_task(&victim, todo.as_str())
        .move_task(&first_task_of(&board, 1), victim.as_str());

    assert_eq!(after, board);
}

#[test]
fn test_deleting_unknown_column_is_noop() {
    let board = seed_board();
    let after = board.clone().delete_column(&ColumnId::from_string("gone"));
    assert_eq!(after, board);
}
