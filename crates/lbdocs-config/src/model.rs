//! Raw configuration structures, as written in `lbdocs.toml`.
//!
//! Optional fields stay `None` here; defaults are applied by
//! [`resolve`](crate::resolve::resolve).

use serde::{Deserialize, Serialize};

use crate::resource::ResourceRef;

/// Root configuration for the documentation site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title
    pub title: String,

    /// Short description shown under the title
    #[serde(default)]
    pub tagline: String,

    /// Browser tab icon
    #[serde(default = "default_favicon")]
    pub favicon: ResourceRef,

    /// Production URL (scheme and host)
    pub url: String,

    /// Path under which the site is served, e.g. `/Vercel-API-Key/`
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Hosting organization or user name
    #[serde(default)]
    pub organization: Option<String>,

    /// Hosting project (repository) name
    #[serde(default)]
    pub project: Option<String>,

    /// What the generator does on a broken internal link
    #[serde(default)]
    pub on_broken_links: Option<BrokenLinkPolicy>,

    pub i18n: I18nConfig,

    #[serde(default)]
    pub navbar: NavbarConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub docs: DocsConfig,
}

impl SiteConfig {
    /// Create a configuration with the given identity and locales, leaving
    /// every other option at its default.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        default_locale: impl Into<String>,
        locales: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tagline: String::new(),
            favicon: default_favicon(),
            url: url.into(),
            base_path: default_base_path(),
            organization: None,
            project: None,
            on_broken_links: None,
            i18n: I18nConfig {
                default_locale: default_locale.into(),
                locales,
            },
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
            theme: ThemeConfig::default(),
            docs: DocsConfig::default(),
        }
    }
}

fn default_favicon() -> ResourceRef {
    ResourceRef::from_static("img/favicon.ico")
}

fn default_base_path() -> String {
    "/".to_string()
}

/// Reaction to a broken internal link at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    #[default]
    Throw,
    Warn,
    Ignore,
}

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct I18nConfig {
    /// Locale used when none is requested
    pub default_locale: String,

    /// All supported locales
    pub locales: Vec<String>,
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavbarConfig {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub logo: Option<Logo>,

    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Navbar logo image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    pub alt: String,
    pub src: ResourceRef,
}

/// Side of the navbar an item is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", deny_unknown_fields)]
pub enum NavItem {
    /// Link to the docs sidebar
    SidebarLink {
        label: String,
        sidebar_id: String,
        #[serde(default)]
        position: NavPosition,
    },

    /// Locale dropdown
    LocaleSwitcher {
        #[serde(default)]
        position: NavPosition,
    },

    /// Link leaving the site
    ExternalLink {
        label: String,
        href: String,
        #[serde(default)]
        position: NavPosition,
    },
}

impl NavItem {
    /// Display label, if this kind of item carries one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::SidebarLink { label, .. } | Self::ExternalLink { label, .. } => {
                Some(label.as_str())
            }
            Self::LocaleSwitcher { .. } => None,
        }
    }

    /// Side of the navbar the item sits on.
    pub fn position(&self) -> NavPosition {
        match self {
            Self::SidebarLink { position, .. }
            | Self::LocaleSwitcher { position }
            | Self::ExternalLink { position, .. } => *position,
        }
    }
}

/// Footer color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

/// Site footer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterConfig {
    #[serde(default)]
    pub style: Option<FooterStyle>,

    /// Link columns, left to right
    #[serde(default)]
    pub links: Vec<FooterGroup>,

    #[serde(default)]
    pub copyright: Option<String>,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterGroup {
    pub title: String,

    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// A footer link. Written with either `to` (internal route) or `href`
/// (external URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFooterLink", into = "RawFooterLink")]
pub struct FooterLink {
    pub label: String,
    pub target: LinkTarget,
}

/// Where a footer link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Route inside the site, resolved by the generator's routing table
    Route(String),
    /// Absolute URL
    External(String),
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFooterLink {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

impl TryFrom<RawFooterLink> for FooterLink {
    type Error = String;

    fn try_from(raw: RawFooterLink) -> Result<Self, Self::Error> {
        let target = match (raw.to, raw.href) {
            (Some(route), None) => LinkTarget::Route(route),
            (None, Some(url)) => LinkTarget::External(url),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "footer link '{}' has both `to` and `href`",
                    raw.label
                ))
            }
            (None, None) => {
                return Err(format!(
                    "footer link '{}' needs either `to` or `href`",
                    raw.label
                ))
            }
        };

        Ok(Self {
            label: raw.label,
            target,
        })
    }
}

impl From<FooterLink> for RawFooterLink {
    fn from(link: FooterLink) -> Self {
        let (to, href) = match link.target {
            LinkTarget::Route(route) => (Some(route), None),
            LinkTarget::External(url) => (None, Some(url)),
        };

        Self {
            label: link.label,
            to,
            href,
        }
    }
}

/// Light/dark color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Appearance options.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Syntax highlighting theme in light mode
    #[serde(default)]
    pub prism_light: Option<String>,

    /// Syntax highlighting theme in dark mode
    #[serde(default)]
    pub prism_dark: Option<String>,

    /// Follow the visitor's `prefers-color-scheme`
    #[serde(default)]
    pub respect_prefers_color_scheme: Option<bool>,

    #[serde(default)]
    pub default_mode: Option<ColorMode>,

    /// Social card image
    #[serde(default)]
    pub image: Option<ResourceRef>,

    #[serde(default)]
    pub custom_css: Option<String>,
}

/// Docs section options.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Sidebar definition file; autogenerated when unset
    #[serde(default)]
    pub sidebar_path: Option<String>,

    /// Route the docs are mounted at
    #[serde(default)]
    pub route_base_path: Option<String>,

    /// Base URL for "edit this page" links
    #[serde(default)]
    pub edit_url: Option<String>,

    #[serde(default)]
    pub blog: Option<bool>,
}
