//! Site configuration model for the load balancer documentation site.
//!
//! The configuration is read once at build start and flows through a
//! validate-then-resolve pipeline before it is handed to the site generator:
//!
//! ```text
//! lbdocs.toml ──load──▶ SiteConfig ──validate──▶ ValidConfiguration ──resolve──▶ ResolvedConfiguration
//! ```

pub mod loader;
pub mod model;
pub mod resolve;
pub mod resource;
pub mod template;
pub mod validate;

pub use loader::{load, load_valid, parse, ConfigFormat, LoadError};
pub use model::{
    BrokenLinkPolicy, ColorMode, DocsConfig, FooterConfig, FooterGroup, FooterLink, FooterStyle,
    I18nConfig, LinkTarget, Logo, NavItem, NavPosition, NavbarConfig, SiteConfig, ThemeConfig,
};
pub use resolve::{
    resolve, resolve_with, Asset, ResolvedConfiguration, ResolvedDocs, ResolvedFooter, ResolvedLogo,
    ResolvedNavbar, ResolvedTheme,
};
pub use resource::ResourceRef;
pub use template::DEFAULT_CONFIG;
pub use validate::{validate, ConfigError, ValidConfiguration};
