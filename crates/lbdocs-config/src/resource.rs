//! Typed handles for static resources (favicon, logos, icons).

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to a static resource, relative to the site's static directory
/// unless it is an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourceRef(Cow<'static, str>);

impl ResourceRef {
    /// Create a reference from a string known at compile time.
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// The path as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this reference points outside the site.
    pub fn is_external(&self) -> bool {
        let path = self.as_str();
        path.starts_with("http://")
            || path.starts_with("https://")
            || path.starts_with("//")
            || path.starts_with("data:")
    }

    /// Resolve to the URL the resource is served from under `base_path`.
    ///
    /// External references are returned unchanged.
    pub fn href(&self, base_path: &str) -> String {
        if self.is_external() {
            return self.as_str().to_string();
        }

        let relative = self
            .as_str()
            .trim_start_matches("./")
            .trim_start_matches('/');
        format!("{}/{}", base_path.trim_end_matches('/'), relative)
    }
}

impl From<String> for ResourceRef {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

impl From<&'static str> for ResourceRef {
    fn from(path: &'static str) -> Self {
        Self::from_static(path)
    }
}

impl From<ResourceRef> for String {
    fn from(resource: ResourceRef) -> Self {
        resource.0.into_owned()
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_base_path() {
        let favicon = ResourceRef::from_static("img/favicon.ico");

        assert_eq!(favicon.href("/"), "/img/favicon.ico");
        assert_eq!(
            favicon.href("/Vercel-API-Key/"),
            "/Vercel-API-Key/img/favicon.ico"
        );
    }

    #[test]
    fn strips_leading_separators() {
        assert_eq!(
            ResourceRef::from_static("./img/logo.svg").href("/docs/"),
            "/docs/img/logo.svg"
        );
        assert_eq!(
            ResourceRef::from_static("/img/logo.svg").href("/docs/"),
            "/docs/img/logo.svg"
        );
    }

    #[test]
    fn external_references_pass_through() {
        let card = ResourceRef::from("https://cdn.example.com/card.png".to_string());

        assert!(card.is_external());
        assert_eq!(card.href("/docs/"), "https://cdn.example.com/card.png");
    }

    #[test]
    fn owned_and_static_compare_equal() {
        assert_eq!(
            ResourceRef::from_static("img/logo.svg"),
            ResourceRef::from("img/logo.svg".to_string())
        );
    }
}
