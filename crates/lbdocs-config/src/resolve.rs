//! Default resolution.
//!
//! A [`ResolvedConfiguration`] has no unset options left and every resource
//! reference already turned into the URL it is served from. This is the value
//! handed to the site generator.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{
    BrokenLinkPolicy, ColorMode, DocsConfig, FooterConfig, FooterGroup, FooterStyle, I18nConfig,
    Logo, NavItem, NavbarConfig, SiteConfig, ThemeConfig,
};
use crate::resource::ResourceRef;

/// Syntax theme used in light mode when none is configured.
pub const DEFAULT_PRISM_LIGHT: &str = "github";

/// Syntax theme used in dark mode when none is configured.
pub const DEFAULT_PRISM_DARK: &str = "dracula";

/// A resource reference together with its resolved URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub source: ResourceRef,
    pub href: String,
}

impl Asset {
    fn new(source: &ResourceRef, base_path: &str) -> Self {
        Self {
            href: source.href(base_path),
            source: source.clone(),
        }
    }
}

/// Fully resolved site configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfiguration {
    pub title: String,
    pub tagline: String,
    pub favicon: Asset,
    pub url: String,
    pub base_path: String,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub on_broken_links: BrokenLinkPolicy,
    pub i18n: I18nConfig,
    pub navbar: ResolvedNavbar,
    pub footer: ResolvedFooter,
    pub theme: ResolvedTheme,
    pub docs: ResolvedDocs,

    /// Every resolved resource, keyed by the reference as written
    pub assets: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedNavbar {
    pub title: Option<String>,
    pub logo: Option<ResolvedLogo>,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLogo {
    pub alt: String,
    pub src: Asset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFooter {
    pub style: FooterStyle,
    pub links: Vec<FooterGroup>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTheme {
    pub prism_light: String,
    pub prism_dark: String,
    pub respect_prefers_color_scheme: bool,
    pub default_mode: ColorMode,
    pub image: Option<Asset>,
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDocs {
    pub sidebar_path: Option<String>,
    pub route_base_path: String,
    pub edit_url: Option<String>,
    pub blog: bool,
}

impl ResolvedConfiguration {
    /// Canonical URL of the site root, e.g. `https://newnol.github.io/Vercel-API-Key/`.
    pub fn site_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.base_path)
    }

    /// URL a resource was resolved to, if it was known at resolution time.
    pub fn asset(&self, resource: &ResourceRef) -> Option<&str> {
        self.assets.get(resource.as_str()).map(String::as_str)
    }
}

/// Fill every unset option with its default and resolve resource references.
pub fn resolve(config: &SiteConfig) -> ResolvedConfiguration {
    resolve_with(config, std::iter::empty())
}

/// Like [`resolve`], also resolving `resources` that live outside the
/// configuration (e.g. homepage feature icons).
pub fn resolve_with<'a>(
    config: &SiteConfig,
    resources: impl IntoIterator<Item = &'a ResourceRef>,
) -> ResolvedConfiguration {
    let base_path = config.base_path.as_str();
    let theme = &config.theme;

    let mut assets = BTreeMap::new();
    let own = std::iter::once(&config.favicon)
        .chain(config.navbar.logo.as_ref().map(|logo| &logo.src))
        .chain(theme.image.as_ref());
    for resource in own {
        assets.insert(resource.as_str().to_string(), resource.href(base_path));
    }
    for resource in resources {
        assets.insert(resource.as_str().to_string(), resource.href(base_path));
    }

    ResolvedConfiguration {
        title: config.title.clone(),
        tagline: config.tagline.clone(),
        favicon: Asset::new(&config.favicon, base_path),
        url: config.url.clone(),
        base_path: config.base_path.clone(),
        organization: config.organization.clone(),
        project: config.project.clone(),
        on_broken_links: config.on_broken_links.unwrap_or_default(),
        i18n: config.i18n.clone(),
        navbar: ResolvedNavbar {
            title: config.navbar.title.clone(),
            logo: config.navbar.logo.as_ref().map(|logo| ResolvedLogo {
                alt: logo.alt.clone(),
                src: Asset::new(&logo.src, base_path),
            }),
            items: config.navbar.items.clone(),
        },
        footer: ResolvedFooter {
            style: config.footer.style.unwrap_or_default(),
            links: config.footer.links.clone(),
            copyright: config.footer.copyright.clone(),
        },
        theme: ResolvedTheme {
            prism_light: theme
                .prism_light
                .clone()
                .unwrap_or_else(|| DEFAULT_PRISM_LIGHT.to_string()),
            prism_dark: theme
                .prism_dark
                .clone()
                .unwrap_or_else(|| DEFAULT_PRISM_DARK.to_string()),
            respect_prefers_color_scheme: theme.respect_prefers_color_scheme.unwrap_or(true),
            default_mode: theme.default_mode.unwrap_or_default(),
            image: theme.image.as_ref().map(|image| Asset::new(image, base_path)),
            custom_css: theme.custom_css.clone(),
        },
        docs: ResolvedDocs {
            sidebar_path: config.docs.sidebar_path.clone(),
            route_base_path: config
                .docs
                .route_base_path
                .clone()
                .unwrap_or_else(|| "/".to_string()),
            edit_url: config.docs.edit_url.clone(),
            blog: config.docs.blog.unwrap_or(false),
        },
        assets,
    }
}

impl From<ResolvedConfiguration> for SiteConfig {
    /// Turn a resolved configuration back into raw form with every option set.
    fn from(resolved: ResolvedConfiguration) -> Self {
        Self {
            title: resolved.title,
            tagline: resolved.tagline,
            favicon: resolved.favicon.source,
            url: resolved.url,
            base_path: resolved.base_path,
            organization: resolved.organization,
            project: resolved.project,
            on_broken_links: Some(resolved.on_broken_links),
            i18n: resolved.i18n,
            navbar: NavbarConfig {
                title: resolved.navbar.title,
                logo: resolved.navbar.logo.map(|logo| Logo {
                    alt: logo.alt,
                    src: logo.src.source,
                }),
                items: resolved.navbar.items,
            },
            footer: FooterConfig {
                style: Some(resolved.footer.style),
                links: resolved.footer.links,
                copyright: resolved.footer.copyright,
            },
            theme: ThemeConfig {
                prism_light: Some(resolved.theme.prism_light),
                prism_dark: Some(resolved.theme.prism_dark),
                respect_prefers_color_scheme: Some(resolved.theme.respect_prefers_color_scheme),
                default_mode: Some(resolved.theme.default_mode),
                image: resolved.theme.image.map(|image| image.source),
                custom_css: resolved.theme.custom_css,
            },
            docs: DocsConfig {
                sidebar_path: resolved.docs.sidebar_path,
                route_base_path: Some(resolved.docs.route_base_path),
                edit_url: resolved.docs.edit_url,
                blog: Some(resolved.docs.blog),
            },
        }
    }
}
