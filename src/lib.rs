//! notion-cli - A task-oriented command-line client for Notion
//!
//! Translates simple commands (create, read, update, query, search) into
//! calls against the Notion REST API and flattens the JSON responses into
//! readable text.

pub mod domain;
pub mod client;
pub mod cli;

pub use domain::{BlockKind, PageId, PropertyNames, PropertyValue, TaskFields};
pub use client::{ApiError, HttpClient, Method, NotionApi, Settings};
