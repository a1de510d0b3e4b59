//! Render the homepage feature grid fragment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lbdocs_config::load_valid;
use lbdocs_features::{render, FeatureGrid, FEATURES};

/// Run the features command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let config = load_valid(config_path)
        .with_context(|| format!("Invalid site configuration in {}", config_path.display()))?
        .resolve_with(FEATURES.iter().map(|feature| &feature.icon));

    let blocks = render(FEATURES);
    let html = FeatureGrid::new()?.to_html(&blocks, &config)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).context("Failed to create output directory")?;
                }
            }
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} features to {}", blocks.len(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lbdocs_config::DEFAULT_CONFIG;
    use tempfile::tempdir;

    #[test]
    fn writes_fragment_to_file() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("lbdocs.toml");
        fs::write(&config_path, DEFAULT_CONFIG).unwrap();
        let output = temp.path().join("build").join("features.html");

        run(&config_path, Some(output.clone())).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Smart Load Balancing"));
        assert_eq!(html.matches("<h3>").count(), 3);
        assert!(html.contains("undraw_docusaurus_mountain.svg"));
        assert!(html.contains("Vercel-API-Key"));
    }

    #[test]
    fn fails_on_missing_config() {
        let temp = tempdir().unwrap();

        assert!(run(&temp.path().join("missing.toml"), None).is_err());
    }
}
