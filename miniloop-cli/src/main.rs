//! miniloop - a kanban board for your terminal
//!
//! Commands:
//! - `miniloop show`: Print the board with ids
//! - `miniloop task add <COLUMN> <TITLE>`: Add a task
//! - `miniloop task edit <ID> [--title ..] [--comment ..] [--delete]`: Edit a task
//! - `miniloop task move <ID> <OVER>`: Move onto a task or a column
//! - `miniloop task toggle <TASK> <SUBTASK>`: Flip a checklist item
//! - `miniloop column add|rename|delete|move`: Column operations
//! - `miniloop export [PATH]` / `miniloop import <PATH>`: File round-trip
//! - `miniloop reset`: Back to the seeded default board
//!
//! The board lives in a single JSON file (platform data dir by default,
//! `--store` to override) and is rewritten after every accepted change.

mod cli;
mod commands;
mod session;
mod state;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("miniloop=debug,miniloop_board=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = commands::run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
