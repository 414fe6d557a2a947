//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprout-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CommandRunner`: External processes (git)
//!   - `Filesystem`: Moving and deleting staged files
//!   - `TemplateRenderer`: Placeholder substitution over a template tree
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandRunner, Filesystem, ShellCommand, TemplateRenderer};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockTemplateRenderer};
