//! Post-generation pipeline - the fixed sequence run on a rendered project.
//!
//! ```text
//! CI service → framework → deployment → cleanup → version control → hook path
//! ```
//!
//! Every placement decision reads the staging tree, so all three promotions
//! finish before cleanup deletes it, and cleanup finishes before the commit
//! so staged leftovers never enter version control. The first error stops
//! the run; nothing is retried or rolled back.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{CommandRunner, Filesystem},
        services::{
            layout_service::{LayoutService, StepOutcome},
            vcs_service::{VcsReport, VcsService},
        },
    },
    domain::ProjectConfig,
    error::SproutResult,
};

/// One step of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    CiService,
    Framework,
    Deployment,
    Cleanup,
    VersionControl,
    HookPath,
}

impl PipelineStep {
    pub const ORDER: [PipelineStep; 6] = [
        Self::CiService,
        Self::Framework,
        Self::Deployment,
        Self::Cleanup,
        Self::VersionControl,
        Self::HookPath,
    ];
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CiService => "set up CI service",
            Self::Framework => "set up framework",
            Self::Deployment => "set up deployment configuration",
            Self::Cleanup => "remove staging folder",
            Self::VersionControl => "initialize version control",
            Self::HookPath => "set git hook path",
        })
    }
}

/// Everything the pipeline did, step by step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub ci_service: StepOutcome,
    pub framework: StepOutcome,
    pub deployment: StepOutcome,
    pub vcs: VcsReport,
}

/// Runs the post-generation steps inside one rendered project.
pub struct PostGenPipeline<'a> {
    runner: &'a dyn CommandRunner,
    filesystem: &'a dyn Filesystem,
    project_root: PathBuf,
}

impl<'a> PostGenPipeline<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        filesystem: &'a dyn Filesystem,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            filesystem,
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Human-readable description of what [`Self::run`] would do.
    pub fn plan(config: &ProjectConfig) -> Vec<String> {
        PipelineStep::ORDER
            .iter()
            .map(|step| match step {
                PipelineStep::CiService => format!("{step}: {}", config.ci_service()),
                PipelineStep::Framework => format!("{step}: {}", config.framework()),
                PipelineStep::Deployment => match config.framework().technology() {
                    Some(tech) => format!("{step}: {tech}"),
                    None => format!("{step}: skipped"),
                },
                PipelineStep::VersionControl => {
                    format!("{step}: remote {}", config.remote().ssh_uri())
                }
                _ => step.to_string(),
            })
            .collect()
    }

    /// Run all steps exactly once, in order.
    #[instrument(skip_all, fields(project = %config.project_slug(), root = %self.project_root.display()))]
    pub fn run(&self, config: &ProjectConfig) -> SproutResult<PipelineReport> {
        let layout = LayoutService::new(self.filesystem, &self.project_root);
        let vcs = VcsService::new(self.runner, &self.project_root);

        let ci_service = layout.set_up_ci_service(config)?;
        let framework = layout.set_up_framework(config)?;
        let deployment = layout.set_up_deployment(config)?;
        layout.remove_staging()?;
        let vcs_report = vcs.init_version_control(config)?;
        vcs.set_hook_path()?;

        info!("Post-generation pipeline finished");
        Ok(PipelineReport {
            ci_service,
            framework,
            deployment,
            vcs: vcs_report,
        })
    }
}
