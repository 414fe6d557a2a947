//! Infrastructure adapters for Sprout.
//!
//! This crate implements the ports defined in `sprout-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::LocalFilesystem;
pub use process::ShellExecutor;
pub use renderer::{MANIFEST_FILE, TemplateManifest, TreeRenderer};
pub use templates::locate_builtin_template;
