//! Print the resolved configuration for the site generator.

use std::path::Path;

use anyhow::{Context, Result};
use lbdocs_config::ResolvedConfiguration;

use super::load_resolved;

/// Run the config command.
pub fn run(config_path: &Path, pretty: bool) -> Result<()> {
    let config = load_resolved(config_path)?;
    println!("{}", to_json(&config, pretty)?);
    Ok(())
}

fn to_json(config: &ResolvedConfiguration, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string(config)
    };
    json.context("Failed to serialize configuration")
}
