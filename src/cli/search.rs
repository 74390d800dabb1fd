//! `search` command

use anyhow::Result;
use serde_json::{json, Value};

use super::output::Output;
use super::query::DEFAULT_PAGE_SIZE;
use crate::client::{NotionApi, Settings};
use crate::domain::{page_url, results, search_title};

/// Shown for results without a usable title
pub const UNTITLED: &str = "[untitled]";

/// Body of `POST search`
pub fn search_body(keyword: &str, limit: Option<u32>) -> Value {
    json!({ "query": keyword, "page_size": limit.unwrap_or(DEFAULT_PAGE_SIZE) })
}

pub fn run(
    api: &dyn NotionApi,
    settings: &Settings,
    output: &Output,
    keyword: &str,
    limit: Option<u32>,
) -> Result<()> {
    output.verbose_ctx("search", &format!("Searching for: {}", keyword));

    let response = api.post("search", &search_body(keyword, limit))?;
    let pages = results(&response);
    output.verbose_ctx("search", &format!("Found {} results", pages.len()));

    let hits: Vec<(String, String, String)> = pages
        .iter()
        .map(|page| {
            let id = page["id"].as_str().unwrap_or_default();
            let title = search_title(page, &settings.properties).unwrap_or_else(|| UNTITLED.to_string());
            (id.to_string(), title, page_url(id))
        })
        .collect();

    if output.is_json() {
        let items: Vec<_> = hits
            .iter()
            .map(|(id, title, url)| json!({ "id": id, "title": title, "url": url }))
            .collect();
        output.data(&items);
    } else {
        for (_, title, url) in &hits {
            println!("  {} — {}", title, url);
        }
    }

    Ok(())
}
