//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Guard the output location
//! 2. Render the template tree with the configuration
//! 3. Run the post-generation pipeline in the rendered project
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, TemplateRenderer},
        services::pipeline::{PipelineReport, PostGenPipeline},
    },
    domain::{ProjectConfig, RenderContext},
    error::SproutResult,
};

/// Outcome of a full generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_root: PathBuf,
    pub pipeline: PipelineReport,
}

/// Main generation service.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            runner,
        }
    }

    /// Where the project for `config` lands inside `output_dir`.
    pub fn project_root(config: &ProjectConfig, output_dir: &Path) -> PathBuf {
        output_dir.join(config.project_slug())
    }

    /// Generate a project from `template_dir` into `output_dir/<project_slug>`.
    ///
    /// With `force`, an existing directory at that location is deleted first.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_slug(),
            template = %template_dir.display(),
            output_dir = %output_dir.display()
        )
    )]
    pub fn generate(
        &self,
        config: &ProjectConfig,
        template_dir: &Path,
        output_dir: &Path,
        force: bool,
    ) -> SproutResult<GenerationReport> {
        info!("Generating {}", config);

        let project_root = Self::project_root(config, output_dir);
        if self.filesystem.exists(&project_root) {
            if !force {
                return Err(ApplicationError::ProjectExists { path: project_root }.into());
            }
            warn!(path = %project_root.display(), "Overwriting existing project directory");
            self.filesystem.remove_dir_all(&project_root)?;
        }

        let context = RenderContext::new(config);
        self.renderer.render(template_dir, &context, &project_root)?;
        info!(path = %project_root.display(), "Template rendered");

        let pipeline =
            PostGenPipeline::new(&*self.runner, &*self.filesystem, &project_root).run(config)?;

        info!("Generation completed successfully");
        Ok(GenerationReport {
            project_root,
            pipeline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockCommandRunner, MockFilesystem, MockTemplateRenderer};
    use crate::domain::{CiService, Framework};
    use crate::error::SproutError;

    fn config() -> ProjectConfig {
        ProjectConfig::builder("myproject")
            .ci_service(CiService::None)
            .framework(Framework::None)
            .vcs("GitHub.com", "painless-software")
            .author("Jane Doe", "jane@example.com")
            .build()
            .unwrap()
    }

    #[test]
    fn existing_project_is_refused_without_force() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all().never();
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let service = GenerateService::new(
            Box::new(renderer),
            Box::new(fs),
            Box::new(MockCommandRunner::new()),
        );

        let err = service
            .generate(&config(), Path::new("tpl"), Path::new("/out"), false)
            .unwrap_err();
        assert!(matches!(
            err,
            SproutError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[test]
    fn render_failure_skips_pipeline() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().never();

        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|tpl, ctx, out| {
                tpl == Path::new("tpl")
                    && out == Path::new("/out/myproject")
                    && ctx.get("cookiecutter.project_slug") == Some("myproject")
            })
            .times(1)
            .returning(|_, _, _| {
                Err(ApplicationError::RenderingFailed {
                    reason: "bad template".into(),
                }
                .into())
            });

        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = GenerateService::new(Box::new(renderer), Box::new(fs), Box::new(runner));
        let result = service.generate(&config(), Path::new("tpl"), Path::new("/out"), false);
        assert!(result.is_err());
    }

    #[test]
    fn project_root_is_named_after_slug() {
        assert_eq!(
            GenerateService::project_root(&config(), Path::new("/out")),
            PathBuf::from("/out/myproject")
        );
    }
}
