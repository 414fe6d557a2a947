//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprout
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sprout-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerateService, PostGenPipeline, ...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: CommandRunner, Filesystem,     │
//! │          TemplateRenderer)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sprout-adapters (Infrastructure)     │
//! │ (ShellExecutor, LocalFilesystem, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, CiService, Framework)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout_core::{
//!     application::PostGenPipeline,
//!     domain::{CiService, Framework, ProjectConfig},
//! };
//!
//! let config = ProjectConfig::builder("myproject")
//!     .ci_service(CiService::Travis)
//!     .framework(Framework::None)
//!     .vcs("GitHub.com", "painless-software")
//!     .author("Jane Doe", "jane@example.com")
//!     .build()
//!     .unwrap();
//!
//! // Adapters are injected by the caller.
//! let pipeline = PostGenPipeline::new(&runner, &filesystem, "./myproject");
//! pipeline.run(&config).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, LayoutService, PipelineReport, PostGenPipeline, StepOutcome,
        VcsService,
        ports::{CommandRunner, Filesystem, ShellCommand, TemplateRenderer},
    };
    pub use crate::domain::{
        Author, CiService, Framework, ProjectConfig, RenderContext, Technology, TestMatrix,
        VcsRemote, VcsSettings,
    };
    pub use crate::error::{SproutError, SproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
