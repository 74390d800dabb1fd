//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | API calls |
//! |---------|---------|-----------|
//! | `create` | New task page in a database | 1 |
//! | `read` | Properties and content of a page | 2 + 1 per table |
//! | `update` | Patch properties, append content | 0-2 |
//! | `query` | List database rows | 1 |
//! | `search` | Workspace keyword search | 1 |
//! | `config` | Show resolved configuration | 0 |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! notion --verbose read https://notion.so/My-Page-2f9871232f4580b6bf51e923c03cb30f
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod content;
mod create;
mod read;
mod update;
mod query;
mod search;
mod config_cmd;

pub use app::{dispatch, run, Cli, Commands};
pub use create::CreateArgs;
pub use output::{Output, OutputFormat};
pub use update::UpdateArgs;
