//! notion - task-oriented command-line client for Notion databases

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = notion_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
