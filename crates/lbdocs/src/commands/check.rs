//! Validate the site configuration.

use std::path::Path;

use anyhow::Result;

use super::load_resolved;

/// Run the check command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_resolved(config_path)?;

    tracing::info!("{} is valid", config_path.display());
    tracing::info!("Site: {} ({})", config.title, config.site_url());
    tracing::info!(
        "Locales: {} (default {})",
        config.i18n.locales.join(", "),
        config.i18n.default_locale
    );
    tracing::info!(
        "{} navbar items, {} footer groups",
        config.navbar.items.len(),
        config.footer.links.len()
    );
    tracing::debug!(
        "Syntax themes: {} / {}",
        config.theme.prism_light,
        config.theme.prism_dark
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lbdocs_config::DEFAULT_CONFIG;
    use tempfile::tempdir;

    #[test]
    fn accepts_default_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lbdocs.toml");
        std::fs::write(&path, DEFAULT_CONFIG).unwrap();

        assert!(run(&path).is_ok());
    }

    #[test]
    fn names_the_violated_invariant() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lbdocs.toml");
        std::fs::write(
            &path,
            DEFAULT_CONFIG.replace("base_path = \"/Vercel-API-Key/\"", "base_path = \"Vercel-API-Key\""),
        )
        .unwrap();

        let err = run(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("must start and end with '/'"));
    }
}
