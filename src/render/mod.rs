//! Renderer module with trait-based format dispatch.

pub mod json;
pub mod outline;

use crate::error::TreeError;
use crate::pages::PageIndex;
use crate::tree::DocTree;

/// Trait for rendering a finished tree into a specific output format.
pub trait Renderer {
    fn render(&self, tree: &DocTree, pages: &PageIndex) -> Result<String, TreeError>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Option<Box<dyn Renderer>> {
    match format {
        "json" => Some(Box::new(json::JsonRenderer)),
        "outline" | "text" => Some(Box::new(outline::OutlineRenderer)),
        _ => None,
    }
}
