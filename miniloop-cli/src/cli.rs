//! Command-line definitions

use clap::{Parser, Subcommand, ValueEnum};
use miniloop_board::Priority;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "miniloop", version, about = "A kanban board for your terminal")]
pub struct Cli {
    /// Board file to use instead of the default data-directory slot
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the board
    Show,
    /// Task operations
    #[command(subcommand)]
    Task(TaskCommand),
    /// Column operations
    #[command(subcommand)]
    Column(ColumnCommand),
    /// Write the board to a pretty-printed JSON file
    Export {
        /// Destination file (defaults to miniloop-board.json)
        path: Option<PathBuf>,
    },
    /// Replace the board with one loaded from a JSON file
    Import {
        /// Source file; must hold a structurally valid board
        path: PathBuf,
    },
    /// Replace the board with the seeded default
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a task to the end of a column
    Add {
        /// Target column id
        column: String,
        /// Task title
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_enum, default_value = "none")]
        priority: PriorityArg,
        /// Subtask text; repeat for several
        #[arg(long = "subtask", value_name = "TEXT")]
        subtasks: Vec<String>,
    },
    /// Edit a task in place
    Edit {
        /// Task id
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,
        /// Append a subtask; repeat for several
        #[arg(long = "subtask", value_name = "TEXT")]
        subtasks: Vec<String>,
        /// Append a comment to the thread; repeat for several
        #[arg(long = "comment", value_name = "TEXT")]
        comments: Vec<String>,
        /// Delete the task instead of saving edits
        #[arg(long, conflicts_with_all = ["title", "description", "priority", "subtasks", "comments"])]
        delete: bool,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },
    /// Move a task onto another task (reorder/insert) or onto a column
    /// (append at its end)
    Move {
        /// Task id to move
        id: String,
        /// Drop target: a task id or a column id
        over: String,
    },
    /// Toggle a subtask's completed flag
    Toggle {
        /// Task id
        task: String,
        /// Subtask id
        subtask: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ColumnCommand {
    /// Append a new column
    Add {
        #[arg(default_value = "New Column")]
        title: String,
    },
    /// Rename a column (whitespace-only titles are ignored)
    Rename {
        /// Column id
        id: String,
        title: String,
    },
    /// Delete a column and every task in it
    Delete {
        /// Column id
        id: String,
    },
    /// Move a column to another column's position
    Move {
        /// Column id to move
        active: String,
        /// Column id currently at the destination
        over: String,
    },
}

/// Priority as a CLI value
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PriorityArg {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::None => Priority::None,
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}
