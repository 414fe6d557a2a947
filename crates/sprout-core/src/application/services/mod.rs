//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "promote a variant".

pub mod generate_service;
pub mod layout_service;
pub mod pipeline;
pub mod vcs_service;

pub use generate_service::{GenerateService, GenerationReport};
pub use layout_service::{LayoutService, SkipReason, StepOutcome};
pub use pipeline::{PipelineReport, PipelineStep, PostGenPipeline};
pub use vcs_service::{VcsReport, VcsService};
