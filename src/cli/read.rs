//! `read` command
//!
//! Prints a page's properties and body:
//!
//! ```text
//! ## Properties
//!   Task name: Buy milk
//!   Status: Done
//!
//! ## Content
//! # Shopping
//!   • milk
//! ```

use anyhow::Result;
use serde_json::{json, Map, Value};

use super::output::Output;
use crate::client::{ApiError, NotionApi};
use crate::domain::{flatten_properties, render_table_row, results, BlockKind, PageId};

/// Renders a list of child blocks, fetching table rows as needed
pub fn render_blocks(api: &dyn NotionApi, children: &Value) -> Result<Vec<String>, ApiError> {
    let mut lines = Vec::new();

    for block in results(children) {
        match BlockKind::from_json(block) {
            BlockKind::Table { id } => {
                let rows = api.get(&format!("blocks/{}/children", id))?;
                lines.extend(results(&rows).iter().filter_map(render_table_row));
            }
            kind => lines.extend(kind.render()),
        }
    }

    Ok(lines)
}

/// `  name: value` lines for the properties section
pub fn property_lines(properties: &[(String, String)]) -> Vec<String> {
    properties
        .iter()
        .map(|(name, value)| format!("  {}: {}", name, value))
        .collect()
}

pub fn run(api: &dyn NotionApi, output: &Output, page_ref: &str) -> Result<()> {
    let id = PageId::parse(page_ref);
    output.verbose_ctx("read", &format!("Page ID: {}", id));
    if !id.is_canonical() {
        output.verbose_ctx("read", "Not a recognizable page ID, sending it as given");
    }

    let page = api.get(&format!("pages/{}", id))?;
    let properties = page["properties"]
        .as_object()
        .map(flatten_properties)
        .unwrap_or_default();

    if !output.is_json() {
        println!("## Properties");
        for line in property_lines(&properties) {
            println!("{}", line);
        }
    }

    let children = api.get(&format!("blocks/{}/children", id))?;
    let lines = render_blocks(api, &children)?;
    output.verbose_ctx("read", &format!("Rendered {} blocks", results(&children).len()));

    if output.is_json() {
        let properties: Map<String, Value> = properties
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();
        output.data(&json!({
            "id": id.as_str(),
            "url": id.url(),
            "properties": properties,
            "content": lines,
        }));
    } else {
        println!();
        println!("## Content");
        for line in &lines {
            println!("{}", line);
        }
    }

    Ok(())
}
