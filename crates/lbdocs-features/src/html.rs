//! HTML fragment for the feature grid.

use minijinja::{context, Environment};
use pulldown_cmark::{html, Parser};
use serde::Serialize;

use lbdocs_config::ResolvedConfiguration;

use crate::grid::{VisualBlock, HEADING_LEVEL};

/// Errors that can occur when rendering the grid fragment.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Resource '{0}' was not resolved with the site configuration")]
    UnresolvedResource(String),
}

/// A cell as seen by the template.
#[derive(Debug, Serialize)]
struct Cell<'a> {
    icon: &'a str,
    title: &'a str,
    description: String,
}

/// Renders visual blocks into the homepage features section.
pub struct FeatureGrid {
    env: Environment<'static>,
}

impl FeatureGrid {
    /// Create a renderer with the built-in template.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("features.html", FEATURES_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render blocks into a `<section class="features">` fragment.
    ///
    /// Icon URLs are looked up in `config`, which must have been resolved
    /// with the icons (see [`lbdocs_config::resolve_with`]); descriptions are
    /// inline Markdown.
    pub fn to_html(
        &self,
        blocks: &[VisualBlock<'_>],
        config: &ResolvedConfiguration,
    ) -> Result<String, RenderError> {
        let cells = blocks
            .iter()
            .map(|block| {
                let icon = config
                    .asset(block.icon)
                    .ok_or_else(|| RenderError::UnresolvedResource(block.icon.to_string()))?;
                Ok(Cell {
                    icon,
                    title: block.title,
                    description: markdown_to_html(block.description),
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        tracing::debug!("Rendering feature grid with {} cells", cells.len());

        let tmpl = self.env.get_template("features.html")?;
        let html = tmpl.render(context! {
            cells => cells,
            column_width => column_width(blocks.len()),
            heading_level => HEADING_LEVEL,
        })?;

        Ok(html)
    }
}

/// Width of one cell on a 12-column grid; at most four cells per row.
fn column_width(cells: usize) -> usize {
    12 / cells.clamp(1, 4)
}

fn markdown_to_html(source: &str) -> String {
    let mut output = String::new();
    html::push_html(&mut output, Parser::new(source));
    output
}

const FEATURES_TEMPLATE: &str = r##"<section class="features">
  <div class="container">
    <div class="row">
{% for cell in cells %}
      <div class="col col--{{ column_width }}">
        <div class="text--center">
          <img class="feature-icon" src="{{ cell.icon }}" alt="" role="img">
        </div>
        <div class="text--center padding-horiz--md">
          <h{{ heading_level }}>{{ cell.title }}</h{{ heading_level }}>
          <div class="feature-description">{{ cell.description | safe }}</div>
        </div>
      </div>
{% endfor %}
    </div>
  </div>
</section>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FeatureDescriptor, FEATURES};
    use crate::grid::render;
    use lbdocs_config::{resolve_with, ResourceRef, SiteConfig};

    fn config(items: &[FeatureDescriptor]) -> ResolvedConfiguration {
        let mut config = SiteConfig::new(
            "Docs",
            "https://example.com",
            "en",
            vec!["en".to_string()],
        );
        config.base_path = "/docs/".to_string();
        resolve_with(&config, items.iter().map(|item| &item.icon))
    }

    #[test]
    fn renders_cells_in_order() {
        let grid = FeatureGrid::new().unwrap();

        let html = grid.to_html(&render(FEATURES), &config(FEATURES)).unwrap();

        let first = html.find("Smart Load Balancing").unwrap();
        let second = html.find("API Key Management").unwrap();
        let third = html.find("100% OpenAI Compatible").unwrap();
        assert!(first < second && second < third);
        assert_eq!(html.matches("class=\"col col--4\"").count(), 3);
        assert_eq!(html.matches("<h3>").count(), 3);
    }

    #[test]
    fn resolves_icons_and_renders_markdown() {
        let items = [FeatureDescriptor {
            title: "Streaming",
            icon: ResourceRef::from_static("img/stream.svg"),
            description: "Supports **SSE** streaming",
        }];
        let grid = FeatureGrid::new().unwrap();

        let html = grid.to_html(&render(&items), &config(&items)).unwrap();

        assert!(html.contains("stream.svg"));
        assert!(html.contains("docs"));
        assert!(html.contains("<strong>SSE</strong>"));
        assert!(html.contains("class=\"col col--12\""));
    }

    #[test]
    fn escapes_titles() {
        let items = [FeatureDescriptor {
            title: "<script>",
            icon: ResourceRef::from_static("img/x.svg"),
            description: "x",
        }];
        let grid = FeatureGrid::new().unwrap();

        let html = grid.to_html(&render(&items), &config(&items)).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_grid_renders_no_cells() {
        let grid = FeatureGrid::new().unwrap();

        let html = grid.to_html(&[], &config(&[])).unwrap();

        assert!(html.contains("<section class=\"features\">"));
        assert!(!html.contains("col--"));
    }

    #[test]
    fn fails_on_icon_missing_from_resolved_config() {
        let items = [FeatureDescriptor {
            title: "Streaming",
            icon: ResourceRef::from_static("img/stream.svg"),
            description: "x",
        }];
        let grid = FeatureGrid::new().unwrap();

        let err = grid.to_html(&render(&items), &config(&[])).unwrap_err();

        assert!(matches!(err, RenderError::UnresolvedResource(ref path) if path == "img/stream.svg"));
    }

    #[test]
    fn column_width_caps_at_four_per_row() {
        assert_eq!(column_width(0), 12);
        assert_eq!(column_width(1), 12);
        assert_eq!(column_width(3), 4);
        assert_eq!(column_width(6), 3);
    }
}
