//! # API Client
//!
//! Everything that talks to the Notion REST API.
//!
//! ## Request Model
//!
//! Each command issues a handful of sequential, blocking requests. There are
//! no retries: any status other than 200/202 becomes an [`ApiError`] that
//! aborts the command.
//!
//! | Endpoint | Method | Used by |
//! |----------|--------|---------|
//! | `pages` | POST | `create` |
//! | `pages/{id}` | GET, PATCH | `read`, `update` |
//! | `blocks/{id}/children` | GET, PATCH | `read`, `update` |
//! | `databases/{id}/query` | POST | `query` |
//! | `search` | POST | `search` |
//!
//! ## Key Types
//!
//! - [`NotionApi`] - The request seam; handlers only see this trait
//! - [`HttpClient`] - `ureq`-backed implementation
//! - [`Settings`] - Resolved configuration (token, API version, defaults)

mod config;
mod error;
mod http;

pub use config::{ConfigError, ConfigOverrides, FileConfig, Settings};
pub use error::ApiError;
pub use http::HttpClient;

use serde_json::Value;

/// HTTP method of an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// Something that can answer Notion API requests
///
/// `endpoint` is relative to the API base, e.g. `pages/{id}`.
pub trait NotionApi {
    /// Issues one request and returns the parsed JSON body
    fn request(&self, method: Method, endpoint: &str, body: Option<&Value>)
        -> Result<Value, ApiError>;

    fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.request(Method::Get, endpoint, None)
    }

    fn post(&self, endpoint: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::Post, endpoint, Some(body))
    }

    fn patch(&self, endpoint: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::Patch, endpoint, Some(body))
    }
}
