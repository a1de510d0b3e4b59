//! Mapping feature descriptors to grid cells.

use serde::Serialize;

use lbdocs_config::ResourceRef;

use crate::descriptor::FeatureDescriptor;

/// Heading level used for feature titles.
pub const HEADING_LEVEL: u8 = 3;

/// A single grid cell, borrowing its content from a [`FeatureDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualBlock<'a> {
    pub icon: &'a ResourceRef,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a FeatureDescriptor> for VisualBlock<'a> {
    fn from(feature: &'a FeatureDescriptor) -> Self {
        Self {
            icon: &feature.icon,
            title: feature.title,
            description: feature.description,
        }
    }
}

/// Render one block per feature, in order.
pub fn render(items: &[FeatureDescriptor]) -> Vec<VisualBlock<'_>> {
    items.iter().map(VisualBlock::from).collect()
}
