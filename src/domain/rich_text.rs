//! Rich text flattening
//!
//! Notion returns styled text as an array of runs, each carrying a
//! `plain_text` projection. We only ever need the projection.

use serde_json::{json, Value};

/// Concatenates the `plain_text` of every run in a rich text array
///
/// Anything that isn't an array flattens to an empty string.
pub fn plain_text(runs: &Value) -> String {
    runs.as_array()
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("plain_text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Builds a single-run rich text array for outgoing requests
pub fn text_runs(content: &str) -> Value {
    json!([{ "text": { "content": content } }])
}
