//! Invariant checks on a loaded configuration.

use crate::model::SiteConfig;
use crate::resolve::{resolve, resolve_with, ResolvedConfiguration};
use crate::resource::ResourceRef;

/// A configuration invariant was violated. Always fatal to the build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Default locale '{default}' is not one of the configured locales [{}]", .locales.join(", "))]
    InvalidLocale {
        default: String,
        locales: Vec<String>,
    },

    #[error("Base path '{0}' must start and end with '/'")]
    MalformedPath(String),

    #[error("Empty label at {0}")]
    EmptyLabel(String),
}

/// A configuration that passed [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidConfiguration(SiteConfig);

impl ValidConfiguration {
    /// The validated configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.0
    }

    pub fn into_inner(self) -> SiteConfig {
        self.0
    }

    /// Apply defaults; see [`resolve`].
    pub fn resolve(&self) -> ResolvedConfiguration {
        resolve(&self.0)
    }

    /// Apply defaults, also resolving `resources`; see [`resolve_with`].
    pub fn resolve_with<'a>(
        &self,
        resources: impl IntoIterator<Item = &'a ResourceRef>,
    ) -> ResolvedConfiguration {
        resolve_with(&self.0, resources)
    }
}

/// Check the configuration invariants.
///
/// Checks run in order (locale, base path, labels) and the first violation is
/// returned. Duplicate locales are collapsed, keeping the first occurrence.
pub fn validate(mut config: SiteConfig) -> Result<ValidConfiguration, ConfigError> {
    let i18n = &config.i18n;
    if !i18n.locales.contains(&i18n.default_locale) {
        return Err(ConfigError::InvalidLocale {
            default: i18n.default_locale.clone(),
            locales: i18n.locales.clone(),
        });
    }

    if !is_well_formed_path(&config.base_path) {
        return Err(ConfigError::MalformedPath(config.base_path));
    }

    check_labels(&config)?;

    let mut seen = Vec::with_capacity(config.i18n.locales.len());
    config.i18n.locales.retain(|locale| {
        if seen.contains(locale) {
            tracing::debug!("Dropping duplicate locale '{}'", locale);
            false
        } else {
            seen.push(locale.clone());
            true
        }
    });

    Ok(ValidConfiguration(config))
}

fn is_well_formed_path(path: &str) -> bool {
    path.starts_with('/') && path.ends_with('/')
}

fn check_labels(config: &SiteConfig) -> Result<(), ConfigError> {
    for (i, item) in config.navbar.items.iter().enumerate() {
        if item.label().is_some_and(str::is_empty) {
            return Err(ConfigError::EmptyLabel(format!("navbar.items[{}]", i)));
        }
    }

    for (g, group) in config.footer.links.iter().enumerate() {
        for (i, link) in group.items.iter().enumerate() {
            if link.label.is_empty() {
                return Err(ConfigError::EmptyLabel(format!(
                    "footer.links[{}].items[{}]",
                    g, i
                )));
            }
        }
    }

    Ok(())
}
