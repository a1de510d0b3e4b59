//! Subcommand implementations.

pub mod check;
pub mod config;
pub mod features;
pub mod init;

use std::path::Path;

use anyhow::{Context, Result};
use lbdocs_config::{load_valid, ResolvedConfiguration};

/// Load, validate and resolve the configuration at `path`.
pub fn load_resolved(path: &Path) -> Result<ResolvedConfiguration> {
    let valid = load_valid(path)
        .with_context(|| format!("Invalid site configuration in {}", path.display()))?;
    Ok(valid.resolve())
}
