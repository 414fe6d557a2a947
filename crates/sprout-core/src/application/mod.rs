//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, PostGenPipeline)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Pipeline steps return errors instead of exiting; only the binary turns a
//! failure into a process exit code.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerateService, GenerationReport, LayoutService, PipelineReport, PipelineStep,
    PostGenPipeline, SkipReason, StepOutcome, VcsReport, VcsService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, ShellCommand, TemplateRenderer};

pub use error::ApplicationError;
