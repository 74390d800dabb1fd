//! Page properties
//!
//! Two directions:
//! - [`PropertyValue`] flattens a property object from the API into a
//!   display string (`name: value` lines in `read`)
//! - [`TaskFields`] builds the typed property payload sent on create/update

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::rich_text::{plain_text, text_runs};

/// Property column names of the task database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyNames {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            title: "Task name".to_string(),
            description: "Description".to_string(),
            status: "Status".to_string(),
            priority: "Priority".to_string(),
        }
    }
}

/// Name of the title property on plain (non-database) pages
pub const FALLBACK_TITLE_PROPERTY: &str = "title";

/// A property value flattened for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Title(String),
    RichText(String),
    Status(String),
    Select(String),
    /// ISO start date
    Date(String),
    /// Any other property type, kept by type name
    Other(String),
}

impl PropertyValue {
    /// Extracts the display value from a property object
    pub fn from_json(prop: &Value) -> Self {
        let kind = prop.get("type").and_then(Value::as_str).unwrap_or_default();
        match kind {
            "title" => Self::Title(plain_text(&prop["title"])),
            "rich_text" => Self::RichText(plain_text(&prop["rich_text"])),
            "status" => Self::Status(option_name(&prop["status"])),
            "select" => Self::Select(option_name(&prop["select"])),
            "date" => Self::Date(
                prop["date"]["start"].as_str().unwrap_or_default().to_string(),
            ),
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the flattened text
    pub fn display(&self) -> String {
        match self {
            Self::Title(s) | Self::RichText(s) | Self::Status(s) | Self::Select(s) | Self::Date(s) => {
                s.clone()
            }
            Self::Other(kind) => format!("[{}]", kind),
        }
    }

    /// Returns true if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.display().is_empty()
    }
}

/// `name` of a status/select option, empty when unset (null)
fn option_name(option: &Value) -> String {
    option["name"].as_str().unwrap_or_default().to_string()
}

/// Flattens every property of a page, dropping empty values
///
/// Order follows the API response.
pub fn flatten_properties(properties: &Map<String, Value>) -> Vec<(String, String)> {
    properties
        .iter()
        .map(|(name, prop)| (name.clone(), PropertyValue::from_json(prop).display()))
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

/// Plain text of a page's title property, empty if missing
pub fn page_title(page: &Value, names: &PropertyNames) -> String {
    plain_text(&page["properties"][names.title.as_str()]["title"])
}

/// Title for search results, which mix database rows and plain pages
///
/// Tries the task title column first, then the generic `title` property.
pub fn search_title(page: &Value, names: &PropertyNames) -> Option<String> {
    let properties = &page["properties"];
    let prop = properties
        .get(names.title.as_str())
        .or_else(|| properties.get(FALLBACK_TITLE_PROPERTY))?;
    let title = plain_text(&prop["title"]);
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Status name of a database row, empty if missing or unset
pub fn page_status(page: &Value, names: &PropertyNames) -> String {
    option_name(&page["properties"][names.status.as_str()]["status"])
}

/// Task fields to write; unset fields are left out of the payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl TaskFields {
    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }

    /// Builds the `properties` object for a create or update request
    pub fn to_properties(&self, names: &PropertyNames) -> Map<String, Value> {
        let mut properties = Map::new();

        if let Some(title) = &self.title {
            properties.insert(names.title.clone(), json!({ "title": text_runs(title) }));
        }
        if let Some(description) = &self.description {
            properties.insert(
                names.description.clone(),
                json!({ "rich_text": text_runs(description) }),
            );
        }
        if let Some(status) = &self.status {
            properties.insert(names.status.clone(), json!({ "status": { "name": status } }));
        }
        if let Some(priority) = &self.priority {
            properties.insert(names.priority.clone(), json!({ "select": { "name": priority } }));
        }

        properties
    }
}
