//! `update` command
//!
//! Property changes and appended content are two independent requests; either,
//! both or neither may be sent.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::content::load_blocks;
use super::create::non_empty;
use super::output::Output;
use crate::client::{NotionApi, Settings};
use crate::domain::{PageId, TaskFields};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Page ID or URL
    pub page_id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,

    /// JSON file holding an array of blocks to append
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Append content (the default and only mode; kept for compatibility)
    #[arg(long)]
    pub append: bool,
}

impl UpdateArgs {
    /// Fields to patch; absent options are left untouched
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: non_empty(&self.title),
            description: non_empty(&self.description),
            status: non_empty(&self.status),
            priority: None,
        }
    }
}

pub fn run(api: &dyn NotionApi, settings: &Settings, output: &Output, args: UpdateArgs) -> Result<()> {
    let id = PageId::parse(&args.page_id);
    output.verbose_ctx("update", &format!("Page ID: {}", id));
    if !id.is_canonical() {
        output.verbose_ctx("update", "Not a recognizable page ID, sending it as given");
    }

    // Read the file before touching the page so a bad path changes nothing
    let children = match &args.content_file {
        Some(path) => Some(load_blocks(path)?),
        None => None,
    };

    let fields = args.fields();
    if !fields.is_empty() {
        let properties = fields.to_properties(&settings.properties);
        output.verbose_ctx("update", &format!("Patching {} properties", properties.len()));
        api.patch(&format!("pages/{}", id), &json!({ "properties": properties }))?;
        output.success("Properties updated");
    }

    if let Some(children) = children {
        output.verbose_ctx("update", &format!("Appending {} blocks", children.len()));
        api.patch(
            &format!("blocks/{}/children", id),
            &json!({ "children": children }),
        )?;
        output.success("Content appended");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputFormat;
    use crate::client::testing::RecordingApi;
    use crate::client::{ConfigOverrides, FileConfig, Method};
    use std::fs;
    use tempfile::TempDir;

    const CANONICAL: &str = "2f987123-2f45-80b6-bf51-e923c03cb30f";

    fn settings() -> Settings {
        Settings::merge(FileConfig::default(), &ConfigOverrides::default(), None)
    }

    fn args() -> UpdateArgs {
        UpdateArgs {
            page_id: "2f9871232f4580b6bf51e923c03cb30f".into(),
            title: None,
            description: None,
            status: None,
            content_file: None,
            append: false,
        }
    }

    fn quiet() -> Output {
        Output::new(OutputFormat::Json, false)
    }

    fn blocks_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("blocks.json");
        fs::write(
            &path,
            r#"[{"object":"block","type":"paragraph","paragraph":{"rich_text":[{"type":"text","text":{"content":"hi"}}]}}]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn no_options_sends_nothing() {
        let api = RecordingApi::new();
        run(&api, &settings(), &quiet(), args()).unwrap();
        assert!(api.calls().is_empty());
    }

    #[test]
    fn status_only_patches_properties() {
        let api = RecordingApi::new();
        let mut a = args();
        a.status = Some("Done".into());

        run(&api, &settings(), &quiet(), a).unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Method::Patch);
        assert_eq!(calls[0].1, format!("pages/{}", CANONICAL));
        let props = calls[0].2.as_ref().unwrap()["properties"].as_object().unwrap().clone();
        assert_eq!(props.len(), 1);
        assert_eq!(props["Status"], json!({ "status": { "name": "Done" } }));
    }

    #[test]
    fn content_only_appends_children() {
        let dir = TempDir::new().unwrap();
        let api = RecordingApi::new();
        let mut a = args();
        a.content_file = Some(blocks_file(&dir));

        run(&api, &settings(), &quiet(), a).unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Method::Patch);
        assert_eq!(calls[0].1, format!("blocks/{}/children", CANONICAL));
        assert_eq!(calls[0].2.as_ref().unwrap()["children"][0]["type"], "paragraph");
    }

    #[test]
    fn both_updates_in_order() {
        let dir = TempDir::new().unwrap();
        let api = RecordingApi::new();
        let mut a = args();
        a.title = Some("Renamed".into());
        a.content_file = Some(blocks_file(&dir));
        a.append = true;

        run(&api, &settings(), &quiet(), a).unwrap();

        let endpoints: Vec<_> = api.calls().into_iter().map(|(_, e, _)| e).collect();
        assert_eq!(
            endpoints,
            vec![format!("pages/{}", CANONICAL), format!("blocks/{}/children", CANONICAL)]
        );
    }

    #[test]
    fn missing_content_file_changes_nothing() {
        let api = RecordingApi::new();
        let mut a = args();
        a.title = Some("Renamed".into());
        a.content_file = Some(PathBuf::from("/definitely/not/here.json"));

        assert!(run(&api, &settings(), &quiet(), a).is_err());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn failed_property_patch_skips_append() {
        let dir = TempDir::new().unwrap();
        let api = RecordingApi::new().fail(409, "conflict_error");
        let mut a = args();
        a.status = Some("Done".into());
        a.content_file = Some(blocks_file(&dir));

        assert!(run(&api, &settings(), &quiet(), a).is_err());
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn update_never_sends_priority() {
        assert_eq!(args().fields().priority, None);
    }
}
