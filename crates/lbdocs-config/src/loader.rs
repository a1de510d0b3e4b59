//! Reading the configuration file from disk.

use std::fs;
use std::path::Path;

use crate::model::SiteConfig;
use crate::validate::{validate, ConfigError, ValidConfiguration};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Parse configuration source text.
pub fn parse(source: &str, format: ConfigFormat) -> Result<SiteConfig, LoadError> {
    let config: SiteConfig = match format {
        ConfigFormat::Toml => toml::from_str(source)?,
        ConfigFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(config)
}

/// Load a configuration file without checking its invariants.
pub fn load(path: &Path) -> Result<SiteConfig, LoadError> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let config = parse(&source, format)?;
    tracing::debug!("Loaded config from {}", path.display());

    Ok(config)
}

/// Load a configuration file and validate it.
pub fn load_valid(path: &Path) -> Result<ValidConfiguration, LoadError> {
    Ok(validate(load(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinkTarget, NavItem, NavPosition};
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
title = "Docs"
url = "https://example.com"

[i18n]
default_locale = "en"
locales = ["en", "vi"]
"#;

    #[test]
    fn parses_minimal_toml() {
        let config = parse(MINIMAL, ConfigFormat::Toml).unwrap();

        assert_eq!(config.title, "Docs");
        assert_eq!(config.base_path, "/");
        assert_eq!(config.favicon.as_str(), "img/favicon.ico");
        assert!(config.navbar.items.is_empty());
        assert_eq!(config.theme.prism_light, None);
    }

    #[test]
    fn parses_nav_and_footer() {
        let source = format!(
            "{}{}",
            MINIMAL,
            r#"
[[navbar.items]]
type = "sidebar-link"
label = "Docs"
sidebar_id = "tutorialSidebar"

[[navbar.items]]
type = "locale-switcher"
position = "right"

[[navbar.items]]
type = "external-link"
label = "GitHub"
href = "https://github.com/newnol/Vercel-API-Key"
position = "right"

[[footer.links]]
title = "Docs"

[[footer.links.items]]
label = "Quick Start"
to = "/quickstart"

[[footer.links.items]]
label = "Issues"
href = "https://github.com/newnol/Vercel-API-Key/issues"
"#
        );

        let config = parse(&source, ConfigFormat::Toml).unwrap();

        assert_eq!(config.navbar.items.len(), 3);
        assert_eq!(
            config.navbar.items[0],
            NavItem::SidebarLink {
                label: "Docs".to_string(),
                sidebar_id: "tutorialSidebar".to_string(),
                position: NavPosition::Left,
            }
        );
        assert_eq!(
            config.navbar.items[1],
            NavItem::LocaleSwitcher {
                position: NavPosition::Right
            }
        );

        assert_eq!(config.navbar.items[2].position(), NavPosition::Right);
        assert_eq!(config.navbar.items[2].label(), Some("GitHub"));

        let items = &config.footer.links[0].items;
        assert_eq!(items[0].target, LinkTarget::Route("/quickstart".to_string()));
        assert_eq!(
            items[1].target,
            LinkTarget::External("https://github.com/newnol/Vercel-API-Key/issues".to_string())
        );
    }

    #[test]
    fn rejects_unknown_nav_kind() {
        let source = format!(
            "{}{}",
            MINIMAL,
            "\n[[navbar.items]]\ntype = \"search\"\n"
        );

        assert!(matches!(
            parse(&source, ConfigFormat::Toml),
            Err(LoadError::Toml(_))
        ));
    }

    #[test]
    fn rejects_footer_link_with_both_targets() {
        let source = format!(
            "{}{}",
            MINIMAL,
            "\n[[footer.links]]\ntitle = \"More\"\n\n[[footer.links.items]]\nlabel = \"x\"\nto = \"/a\"\nhref = \"https://b\"\n"
        );

        let err = parse(&source, ConfigFormat::Toml).unwrap_err();

        assert!(err.to_string().contains("both `to` and `href`"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let source = format!("colour = \"red\"\n{}", MINIMAL);

        assert!(parse(&source, ConfigFormat::Toml).is_err());
    }

    #[test]
    fn rejects_unknown_nav_item_keys() {
        let misspelled = format!(
            "{}{}",
            MINIMAL,
            "\n[[navbar.items]]\ntype = \"external-link\"\nlabel = \"GitHub\"\nhref = \"https://github.com\"\npositon = \"right\"\n"
        );
        let stray_label = format!(
            "{}{}",
            MINIMAL,
            "\n[[navbar.items]]\ntype = \"locale-switcher\"\nlabel = \"Language\"\n"
        );

        assert!(matches!(
            parse(&misspelled, ConfigFormat::Toml),
            Err(LoadError::Toml(_))
        ));
        assert!(matches!(
            parse(&stray_label, ConfigFormat::Toml),
            Err(LoadError::Toml(_))
        ));
    }

    #[test]
    fn parses_yaml() {
        let source = r#"
title: Docs
url: https://example.com
base_path: /docs/
i18n:
  default_locale: vi
  locales: [en, vi]
theme:
  prism_dark: oneDark
"#;

        let config = parse(source, ConfigFormat::Yaml).unwrap();

        assert_eq!(config.base_path, "/docs/");
        assert_eq!(config.i18n.default_locale, "vi");
        assert_eq!(config.theme.prism_dark.as_deref(), Some("oneDark"));
    }

    #[test]
    fn loads_and_validates_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lbdocs.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let valid = load_valid(&path).unwrap();

        assert_eq!(valid.config().title, "Docs");
    }

    #[test]
    fn surfaces_invariant_violations() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lbdocs.toml");
        std::fs::write(&path, MINIMAL.replace("default_locale = \"en\"", "default_locale = \"fr\"")).unwrap();

        let err = load_valid(&path).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Invalid(ConfigError::InvalidLocale { .. })
        ));
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = load(Path::new("lbdocs.json")).unwrap_err();

        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn reports_missing_file() {
        let temp = tempdir().unwrap();

        let err = load(&temp.path().join("missing.toml")).unwrap_err();

        assert!(matches!(err, LoadError::Read { .. }));
    }
}
