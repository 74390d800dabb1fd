//! `query` command
//!
//! Lists the rows of a task database, optionally filtered by status.

use anyhow::Result;
use serde_json::{json, Value};

use super::output::Output;
use crate::client::{NotionApi, Settings};
use crate::domain::{page_status, page_title, page_url, results, PropertyNames};

/// Page size when `--limit` is omitted
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the API accepts
pub const MAX_PAGE_SIZE: i64 = 100;

/// Body of `POST databases/{id}/query`
pub fn query_body(limit: Option<u32>, status: Option<&str>, names: &PropertyNames) -> Value {
    let mut body = json!({ "page_size": limit.unwrap_or(DEFAULT_PAGE_SIZE) });
    if let Some(status) = status {
        body["filter"] = json!({
            "property": names.status.as_str(),
            "status": { "equals": status },
        });
    }
    body
}

/// One result line: `  [status] title — url`
pub fn row_line(title: &str, status: &str, url: &str) -> String {
    if status.is_empty() {
        format!("  {} — {}", title, url)
    } else {
        format!("  [{}] {} — {}", status, title, url)
    }
}

pub fn run(
    api: &dyn NotionApi,
    settings: &Settings,
    output: &Output,
    database: Option<&str>,
    filter_status: Option<&str>,
    limit: Option<u32>,
) -> Result<()> {
    let database = settings.database_id(database)?;
    let filter_status = filter_status.filter(|s| !s.is_empty());
    output.verbose_ctx(
        "query",
        &format!("Database: {}, status filter: {:?}", database, filter_status),
    );

    let body = query_body(limit, filter_status, &settings.properties);
    let response = api.post(&format!("databases/{}/query", database), &body)?;
    let pages = results(&response);
    output.verbose_ctx("query", &format!("Found {} pages", pages.len()));

    if output.is_json() {
        let items: Vec<_> = pages
            .iter()
            .map(|page| {
                let id = page["id"].as_str().unwrap_or_default();
                let status = page_status(page, &settings.properties);
                let status = (!status.is_empty()).then_some(status);
                json!({
                    "id": id,
                    "title": page_title(page, &settings.properties),
                    "status": status,
                    "url": page_url(id),
                })
            })
            .collect();
        output.data(&items);
    } else {
        for page in pages {
            let id = page["id"].as_str().unwrap_or_default();
            println!(
                "{}",
                row_line(
                    &page_title(page, &settings.properties),
                    &page_status(page, &settings.properties),
                    &page_url(id),
                )
            );
        }
    }

    Ok(())
}
