//! Template rendering adapters.

mod manifest;
mod tree;

pub use manifest::{MANIFEST_FILE, TemplateManifest};
pub use tree::TreeRenderer;
