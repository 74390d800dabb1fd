//! `create` command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Map, Value};

use super::content::load_blocks;
use super::output::Output;
use crate::client::{NotionApi, Settings};
use crate::domain::{page_url, PageId, TaskFields};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Task title
    #[arg(long)]
    pub title: String,

    /// Database ID or URL (defaults to the configured database)
    #[arg(long)]
    pub db: Option<String>,

    /// Task description
    #[arg(long)]
    pub description: Option<String>,

    /// Task status (defaults to the configured default status)
    ///
    /// A status is always sent: without this flag the page gets the
    /// `default_status` from config, `Not Started` unless changed.
    #[arg(long)]
    pub status: Option<String>,

    /// Task priority
    #[arg(long)]
    pub priority: Option<String>,

    /// JSON file holding an array of blocks for the page body
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

impl CreateArgs {
    /// Task fields to write, with the default status filled in
    pub fn fields(&self, default_status: &str) -> TaskFields {
        TaskFields {
            title: Some(self.title.clone()),
            description: non_empty(&self.description),
            status: non_empty(&self.status).or_else(|| Some(default_status.to_string())),
            priority: non_empty(&self.priority),
        }
    }
}

/// Treats `--flag ""` the same as an absent flag
pub(super) fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

/// Body of `POST pages`
pub fn page_request(
    database: &PageId,
    properties: Map<String, Value>,
    children: Option<Vec<Value>>,
) -> Value {
    let mut body = json!({
        "parent": { "database_id": database.as_str() },
        "properties": properties,
    });
    if let Some(children) = children {
        body["children"] = Value::Array(children);
    }
    body
}

pub fn run(api: &dyn NotionApi, settings: &Settings, output: &Output, args: CreateArgs) -> Result<()> {
    let database = settings.database_id(args.db.as_deref())?;
    output.verbose_ctx("create", &format!("Target database: {}", database));

    let children = match &args.content_file {
        Some(path) => {
            let blocks = load_blocks(path)?;
            output.verbose_ctx("create", &format!("Loaded {} blocks from {}", blocks.len(), path.display()));
            Some(blocks)
        }
        None => None,
    };

    let properties = args
        .fields(&settings.default_status)
        .to_properties(&settings.properties);
    let body = page_request(&database, properties, children);

    let page = api.post("pages", &body)?;
    let id = page["id"]
        .as_str()
        .context("Create response is missing the page id")?;
    let url = page_url(id);

    let summary = json!({ "id": id, "url": url });
    if !output.is_json() {
        println!("Page created: {}", url);
    }
    output.data(&summary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputFormat;
    use crate::client::testing::RecordingApi;
    use crate::client::{ConfigOverrides, FileConfig, Method};

    fn settings() -> Settings {
        let overrides = ConfigOverrides {
            token: Some("secret".into()),
            default_database_id: Some("2f9871232f4580b6bf51e923c03cb30f".into()),
            ..Default::default()
        };
        Settings::merge(FileConfig::default(), &overrides, None)
    }

    fn args(title: &str) -> CreateArgs {
        CreateArgs {
            title: title.to_string(),
            db: None,
            description: None,
            status: None,
            priority: None,
            content_file: None,
        }
    }

    fn quiet() -> Output {
        Output::new(OutputFormat::Json, false)
    }

    #[test]
    fn posts_to_default_database() {
        let api = RecordingApi::new().respond(json!({ "id": "11111111-2222-3333-4444-555555555555" }));

        run(&api, &settings(), &quiet(), args("Buy milk")).unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        let (method, endpoint, body) = &calls[0];
        assert_eq!(*method, Method::Post);
        assert_eq!(endpoint, "pages");

        let body = body.as_ref().unwrap();
        assert_eq!(body["parent"]["database_id"], "2f987123-2f45-80b6-bf51-e923c03cb30f");
        assert_eq!(body["properties"]["Task name"]["title"][0]["text"]["content"], "Buy milk");
        assert_eq!(body["properties"]["Status"]["status"]["name"], "Not Started");
        assert!(body.get("children").is_none());
    }

    #[test]
    fn explicit_db_url_is_normalized() {
        let api = RecordingApi::new().respond(json!({ "id": "x" }));
        let mut a = args("T");
        a.db = Some("https://notion.so/Tasks-aaaaaaaabbbbccccddddeeeeeeeeeeee?v=1".into());

        run(&api, &settings(), &quiet(), a).unwrap();

        let body = api.calls()[0].2.clone().unwrap();
        assert_eq!(body["parent"]["database_id"], "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee");
    }

    #[test]
    fn fields_only_include_given_options() {
        let mut a = args("T");
        a.priority = Some("High".into());
        a.description = Some(String::new());
        let fields = a.fields("Not Started");

        assert_eq!(fields.priority.as_deref(), Some("High"));
        assert_eq!(fields.description, None);
        assert_eq!(fields.status.as_deref(), Some("Not Started"));
    }

    #[test]
    fn explicit_status_overrides_default() {
        let mut a = args("T");
        a.status = Some("In progress".into());
        assert_eq!(a.fields("Not Started").status.as_deref(), Some("In progress"));
    }

    #[test]
    fn page_request_with_children() {
        let db = PageId::parse("db");
        let body = page_request(&db, Map::new(), Some(vec![json!({ "type": "divider", "divider": {} })]));
        assert_eq!(body["children"].as_array().unwrap().len(), 1);
        assert_eq!(body["parent"]["database_id"], "db");
    }

    #[test]
    fn missing_id_in_response_is_an_error() {
        let api = RecordingApi::new().respond(json!({ "object": "page" }));
        assert!(run(&api, &settings(), &quiet(), args("T")).is_err());
    }

    #[test]
    fn api_error_propagates() {
        let api = RecordingApi::new().fail(400, "validation_error");
        let err = run(&api, &settings(), &quiet(), args("T")).unwrap_err();
        assert!(err.to_string().contains("400"));
    }
}
