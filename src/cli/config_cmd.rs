//! `config` command

use anyhow::Result;
use serde_json::json;

use super::output::Output;
use crate::client::Settings;

const NOT_SET: &str = "(not set)";

/// Show the resolved configuration, with the token masked
pub fn show(settings: &Settings, output: &Output) -> Result<()> {
    let config_path = settings
        .config_path
        .clone()
        .or_else(Settings::default_config_path)
        .map(|p| p.display().to_string());
    let token = settings.masked_token();

    if output.is_json() {
        output.data(&json!({
            "config_file": config_path,
            "config_file_loaded": settings.config_path.is_some(),
            "base_url": settings.base_url,
            "api_version": settings.api_version,
            "token": token,
            "default_database_id": settings.default_database_id,
            "default_status": settings.default_status,
            "properties": settings.properties,
        }));
        return Ok(());
    }

    let loaded = if settings.config_path.is_some() { "" } else { " (not found)" };
    println!(
        "{:<18} {}{}",
        "Config file:",
        config_path.as_deref().unwrap_or(NOT_SET),
        loaded
    );
    println!("{:<18} {}", "Base URL:", settings.base_url);
    println!("{:<18} {}", "API version:", settings.api_version);
    println!("{:<18} {}", "Token:", token.as_deref().unwrap_or(NOT_SET));
    println!(
        "{:<18} {}",
        "Default database:",
        settings.default_database_id.as_deref().unwrap_or(NOT_SET)
    );
    println!("{:<18} {}", "Default status:", settings.default_status);
    println!("Properties:");
    println!("  {:<16} {}", "title", settings.properties.title);
    println!("  {:<16} {}", "description", settings.properties.description);
    println!("  {:<16} {}", "status", settings.properties.status);
    println!("  {:<16} {}", "priority", settings.properties.priority);

    Ok(())
}
