//! Command handlers: map CLI invocations onto engine operations
//!
//! Handlers validate targets enough to give the user a useful message, run
//! exactly one state transition, and report what happened. The engine
//! itself never errors on stale references - when an apply comes back
//! unchanged, the handler says so instead of pretending.

use crate::cli::{Cli, ColumnCommand, Command, TaskCommand};
use crate::session::EditSession;
use crate::state::AppState;
use crate::store::FileStore;
use anyhow::{bail, Context};
use miniloop_board::store::EXPORT_FILE_NAME;
use miniloop_board::{Board, ColumnId, SubtaskDraft, SubtaskId, TaskDraft, TaskId};
use std::fs;
use std::path::PathBuf;

/// Run one CLI invocation to completion.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(FileStore::default_location);
    let mut state = AppState::open(FileStore::new(store_path))
        .context("could not open the board store")?;

    match cli.command {
        Command::Show => {
            print!("{}", render_board(state.board()));
            Ok(())
        }
        Command::Task(cmd) => run_task(&mut state, cmd),
        Command::Column(cmd) => run_column(&mut state, cmd),
        Command::Export { path } => export(&state, path),
        Command::Import { path } => import(&mut state, path),
        Command::Reset => {
            state.reset()?;
            println!("Board reset to the default.");
            Ok(())
        }
    }
}

fn run_task(state: &mut AppState, cmd: TaskCommand) -> anyhow::Result<()> {
    match cmd {
        TaskCommand::Add {
            column,
            title,
            description,
            priority,
            subtasks,
        } => {
            let column_id = ColumnId::from_string(column);
            if state.board().find_column(&column_id).is_none() {
                bail!("column not found: {}", column_id);
            }

            let mut draft = TaskDraft::new(title).with_priority(priority.into());
            if let Some(description) = description {
                draft = draft.with_description(description);
            }
            for text in subtasks {
                draft = draft.with_subtask(text);
            }
            if !draft.is_confirmable() {
                bail!("task title must not be empty");
            }

            EditSession::add(column_id, draft).confirm(state)?;
            println!("Task added.");
            Ok(())
        }
        TaskCommand::Edit {
            id,
            title,
            description,
            priority,
            subtasks,
            comments,
            delete,
        } => {
            let task_id = TaskId::from_string(id);
            let Some(mut session) = EditSession::edit(state, &task_id) else {
                bail!("task not found: {}", task_id);
            };

            if delete {
                session.delete_task(state)?;
                println!("Task deleted.");
                return Ok(());
            }

            if let Some(title) = title {
                session.draft.title = title;
            }
            if let Some(description) = description {
                session.draft.description = Some(description);
            }
            if let Some(priority) = priority {
                session.draft.priority = priority.into();
            }
            for text in subtasks {
                session.draft.subtasks.push(SubtaskDraft::new(text));
            }
            for text in &comments {
                session.draft.add_comment(text);
            }

            if !session.draft.is_confirmable() {
                session.cancel();
                bail!("task title must not be empty");
            }
            if session.confirm(state)? {
                println!("Task updated.");
            } else {
                println!("No changes.");
            }
            Ok(())
        }
        TaskCommand::Delete { id } => {
            let task_id = TaskId::from_string(id);
            if state.apply(|b| b.delete_task(&task_id))? {
                println!("Task deleted.");
            } else {
                println!("Nothing to delete: task {} is not on the board.", task_id);
            }
            Ok(())
        }
        TaskCommand::Move { id, over } => {
            let task_id = TaskId::from_string(id);
            if state.apply(|b| b.move_task(&task_id, &over))? {
                println!("Task moved.");
            } else {
                println!("Nothing moved; check the task id and the drop target.");
            }
            Ok(())
        }
        TaskCommand::Toggle { task, subtask } => {
            let task_id = TaskId::from_string(task);
            let subtask_id = SubtaskId::from_string(subtask);
            if state.apply(|b| b.toggle_subtask(&task_id, &subtask_id))? {
                println!("Subtask toggled.");
            } else {
                println!("No such subtask on that task.");
            }
            Ok(())
        }
    }
}

fn run_column(state: &mut AppState, cmd: ColumnCommand) -> anyhow::Result<()> {
    match cmd {
        ColumnCommand::Add { title } => {
            state.apply(|b| b.add_column(title))?;
            println!("Column added.");
            Ok(())
        }
        ColumnCommand::Rename { id, title } => {
            let column_id = ColumnId::from_string(id);
            if state.board().find_column(&column_id).is_none() {
                bail!("column not found: {}", column_id);
            }
            if state.apply(|b| b.rename_column(&column_id, &title))? {
                println!("Column renamed.");
            } else {
                println!("Title unchanged.");
            }
            Ok(())
        }
        ColumnCommand::Delete { id } => {
            let column_id = ColumnId::from_string(id);
            let task_count = match state.board().find_column(&column_id) {
                Some(column) => column.task_count(),
                None => bail!("column not found: {}", column_id),
            };
            state.apply(|b| b.delete_column(&column_id))?;
            println!("Column deleted along with {} task(s).", task_count);
            Ok(())
        }
        ColumnCommand::Move { active, over } => {
            let active = ColumnId::from_string(active);
            let over = ColumnId::from_string(over);
            if state.apply(|b| b.move_column(&active, &over))? {
                println!("Column moved.");
            } else {
                println!("Nothing moved; check both column ids.");
            }
            Ok(())
        }
    }
}

fn export(state: &AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    let json = state.board().to_json_pretty()?;
    fs::write(&path, json).with_context(|| format!("could not write {}", path.display()))?;
    println!("Board exported to {}.", path.display());
    Ok(())
}

fn import(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(&path).with_context(|| format!("could not read {}", path.display()))?;

    let candidate = match Board::from_json(&text) {
        Ok(board) => board,
        Err(err) => bail!("invalid board file {}: {}", path.display(), err),
    };
    match state.replace_board(candidate)? {
        Ok(()) => {
            println!("Board loaded from {}.", path.display());
            Ok(())
        }
        Err(err) => bail!("invalid board file {}: {}", path.display(), err),
    }
}

/// Plain-text rendering of the whole board, ids included so they can be
/// fed back into commands.
fn render_board(board: &Board) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Mini Loop - {} column(s), {} task(s)",
        board.column_count(),
        board.task_count()
    );

    for column in board.ordered_columns() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "## {} ({})  [{}]",
            column.title,
            column.task_count(),
            column.id
        );
        for task in &column.tasks {
            let (done, total) = task.subtask_counts();
            let progress = if total > 0 {
                format!("  ({}/{})", done, total)
            } else {
                String::new()
            };
            let _ = writeln!(
                out,
                "  • [{}] {}{}  [{}]",
                task.priority.label(),
                task.title,
                progress,
                task.id
            );
            if let Some(description) = &task.description {
                let _ = writeln!(out, "      {}", description);
            }
            for subtask in &task.subtasks {
                let mark = if subtask.completed { "x" } else { " " };
                let _ = writeln!(out, "      [{}] {}  [{}]", mark, subtask.text, subtask.id);
            }
            for comment in &task.comments {
                let _ = writeln!(
                    out,
                    "      > {}  ({})",
                    comment.text,
                    comment.timestamp.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }
    out
}
