//! Content blocks
//!
//! Blocks come back from `blocks/{id}/children` as objects tagged by `type`,
//! with the payload under a key of the same name:
//!
//! ```json
//! { "id": "...", "type": "heading_2", "heading_2": { "rich_text": [...] } }
//! ```
//!
//! Rendering is markdown-flavoured plain text. Tables are the one block whose
//! content lives in its children, so [`BlockKind::Table`] carries the block ID
//! and the caller fetches and renders the rows with [`render_table_row`].

use serde_json::Value;

use super::rich_text::plain_text;

/// A content block, classified for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading { level: u8, text: String },
    BulletedItem(String),
    NumberedItem(String),
    Code { language: String, text: String },
    /// Rows must be fetched separately
    Table { id: String },
    Divider,
    /// Paragraphs and every other block type
    Text(String),
}

impl BlockKind {
    /// Classifies a block object from the API
    pub fn from_json(block: &Value) -> Self {
        let kind = block.get("type").and_then(Value::as_str).unwrap_or_default();
        let data = &block[kind];
        let text = plain_text(&data["rich_text"]);

        if let Some(level) = heading_level(kind) {
            return Self::Heading { level, text };
        }

        match kind {
            "bulleted_list_item" => Self::BulletedItem(text),
            "numbered_list_item" => Self::NumberedItem(text),
            "code" => Self::Code {
                language: data["language"].as_str().unwrap_or_default().to_string(),
                text,
            },
            "table" => Self::Table {
                id: block["id"].as_str().unwrap_or_default().to_string(),
            },
            "divider" => Self::Divider,
            _ => Self::Text(text),
        }
    }

    /// Renders the block as output lines
    ///
    /// Tables render nothing here; see [`render_table_row`].
    pub fn render(&self) -> Vec<String> {
        match self {
            Self::Heading { level, text } => {
                vec![format!("{} {}", "#".repeat(*level as usize), text)]
            }
            Self::BulletedItem(text) => vec![format!("  • {}", text)],
            Self::NumberedItem(text) => vec![format!("  1. {}", text)],
            Self::Code { language, text } => {
                vec![format!("```{}", language), text.clone(), "```".to_string()]
            }
            Self::Table { .. } => Vec::new(),
            Self::Divider => vec!["---".to_string()],
            Self::Text(text) => vec![text.clone()],
        }
    }
}

/// `heading_1` .. `heading_3` → 1..3
fn heading_level(kind: &str) -> Option<u8> {
    let digit = kind.strip_prefix("heading_")?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=3) => Some(level),
        _ => None,
    }
}

/// Renders one child of a table block as a pipe-delimited line
///
/// Returns `None` for children that aren't `table_row`s.
pub fn render_table_row(row: &Value) -> Option<String> {
    if row.get("type").and_then(Value::as_str) != Some("table_row") {
        return None;
    }
    let cells: Vec<String> = row["table_row"]["cells"]
        .as_array()
        .map(|cells| cells.iter().map(plain_text).collect())
        .unwrap_or_default();
    Some(format!("  | {} |", cells.join(" | ")))
}

/// Extracts the `results` array of a list response
pub fn results(list: &Value) -> &[Value] {
    list["results"].as_array().map(Vec::as_slice).unwrap_or_default()
}
