//! Homepage feature grid.
//!
//! A fixed list of [`FeatureDescriptor`]s is rendered into [`VisualBlock`]s,
//! one per feature and in list order, and then into an HTML fragment the site
//! generator embeds on the homepage.

pub mod descriptor;
pub mod grid;
pub mod html;

pub use descriptor::{FeatureDescriptor, FEATURES};
pub use grid::{render, VisualBlock, HEADING_LEVEL};
pub use html::{FeatureGrid, RenderError};
