//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::query::MAX_PAGE_SIZE;
use super::{config_cmd, create, query, read, search, update};
use crate::client::{ConfigOverrides, HttpClient, NotionApi, Settings};

#[derive(Parser)]
#[command(name = "notion")]
#[command(author, version, about = "Task-oriented command-line client for Notion databases")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Integration token
    #[arg(long, global = true, env = "NOTION_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Database used when a command doesn't name one
    #[arg(long, global = true, env = "NOTION_DEFAULT_DB")]
    pub default_db: Option<String>,

    /// Notion-Version header
    #[arg(long, global = true, env = "NOTION_API_VERSION")]
    pub api_version: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "NOTION_BASE_URL")]
    pub base_url: Option<String>,

    /// Config file (defaults to config.toml in the user config directory)
    #[arg(long, global = true, env = "NOTION_CLI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings supplied through flags and environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            token: self.token.clone(),
            default_database_id: self.default_db.clone(),
            api_version: self.api_version.clone(),
            base_url: self.base_url.clone(),
            config_path: self.config.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a task page in a database
    Create(create::CreateArgs),

    /// Show a page's properties and content
    Read {
        /// Page ID or URL
        page_id: String,
    },

    /// Update a page's properties and/or append content
    Update(update::UpdateArgs),

    /// List pages in a database
    Query {
        /// Database ID or URL (defaults to the configured database)
        database_id: Option<String>,

        /// Only show pages with this status
        #[arg(long)]
        filter_status: Option<String>,

        /// Maximum number of pages (1-100, default 10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE))]
        limit: Option<u32>,
    },

    /// Search pages by keyword
    Search {
        /// Search keyword
        keyword: String,

        /// Maximum number of results (1-100, default 10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE))]
        limit: Option<u32>,
    },

    /// Show the resolved configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("notion-cli starting");

    let settings = Settings::resolve(&cli.overrides())?;
    match &settings.config_path {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "No config file; using flags, environment and defaults"),
    }

    if let Commands::Config = cli.command {
        return config_cmd::show(&settings, &output);
    }

    let client = HttpClient::from_settings(&settings)?;
    output.verbose_ctx("http", &format!("API base: {} (version {})", settings.base_url, settings.api_version));

    dispatch(cli.command, &client, &settings, &output)?;

    output.verbose("Command completed successfully");
    Ok(())
}

/// Runs one API command
pub fn dispatch(command: Commands, api: &dyn NotionApi, settings: &Settings, output: &Output) -> Result<()> {
    match command {
        Commands::Create(args) => create::run(api, settings, output, args),
        Commands::Read { page_id } => read::run(api, output, &page_id),
        Commands::Update(args) => update::run(api, settings, output, args),
        Commands::Query {
            database_id,
            filter_status,
            limit,
        } => query::run(
            api,
            settings,
            output,
            database_id.as_deref(),
            filter_status.as_deref(),
            limit,
        ),
        Commands::Search { keyword, limit } => search::run(api, settings, output, &keyword, limit),
        Commands::Config => config_cmd::show(settings, output),
    }
}
