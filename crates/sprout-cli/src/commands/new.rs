//! Implementation of the `sprout new` command.
//!
//! Responsibility: merge CLI flags over the configured defaults into a
//! `ProjectConfig`, locate the template, call the core generate service, and
//! display results. No business logic lives here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::json;
use tracing::{debug, info, instrument};

use sprout_adapters::{LocalFilesystem, ShellExecutor, TreeRenderer, locate_builtin_template};
use sprout_core::{
    application::{GenerateService, GenerationReport, PostGenPipeline, StepOutcome},
    domain::{CiService, Framework, ProjectConfig},
};

use crate::{
    cli::NewArgs,
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sprout new` command.
///
/// Dispatch sequence:
/// 1. Build the `ProjectConfig` (flags over config defaults, validated)
/// 2. Locate the template directory
/// 3. Early-exit if `--dry-run`
/// 4. Render and assemble the project via `GenerateService`
/// 5. Print a summary
#[instrument(skip_all, fields(project = %args.project_slug))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = build_project_config(&args, &config.defaults)?;
    let template_dir = resolve_template(args.template.as_deref(), &config)?;
    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let project_root = GenerateService::project_root(&project, &output_dir);

    debug!(
        ci_service = %project.ci_service(),
        framework = %project.framework(),
        template = %template_dir.display(),
        "Project configuration resolved"
    );

    if args.dry_run {
        return show_plan(&project, &template_dir, &project_root, &output);
    }

    let service = GenerateService::new(
        Box::new(TreeRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ShellExecutor::new()),
    );

    if !output.is_json() {
        output.header(&format!("Creating '{}'...", project.project_slug()))?;
    }
    info!(path = %project_root.display(), "Generation started");

    let report = service.generate(&project, &template_dir, &output_dir, args.force)?;

    if output.is_json() {
        output.json(&report_json(&project, &report))?;
    } else {
        show_summary(&project, &report, &output)?;
    }

    Ok(())
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Merge flags over `[defaults]` and validate the result.
fn build_project_config(args: &NewArgs, defaults: &Defaults) -> CliResult<ProjectConfig> {
    let ci_service = args
        .ci_service
        .as_deref()
        .unwrap_or(&defaults.ci_service);
    let ci_service = CiService::from_str(ci_service).map_err(|e| CliError::Core(e.into()))?;

    let framework = args.framework.as_deref().unwrap_or(&defaults.framework);
    let framework = Framework::from_str(framework).map_err(|e| CliError::Core(e.into()))?;

    let pick = |flag: &Option<String>, default: &str| -> String {
        flag.clone().unwrap_or_else(|| default.to_string())
    };

    ProjectConfig::builder(args.project_slug.as_str())
        .ci_service(ci_service)
        .framework(framework)
        .vcs(
            pick(&args.vcs_platform, &defaults.vcs_platform),
            pick(&args.vcs_account, &defaults.vcs_account),
        )
        .author(
            pick(&args.full_name, &defaults.full_name),
            pick(&args.email, &defaults.email),
        )
        .tests(pick(&args.tests, &defaults.tests))
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

/// `--template`, then `templates.local_path`, then the built-in template.
fn resolve_template(explicit: Option<&Path>, config: &AppConfig) -> CliResult<PathBuf> {
    let configured = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.templates.local_path.clone());

    match configured {
        Some(path) if path.is_dir() => Ok(path),
        Some(path) => Err(CliError::TemplateNotFound { path }),
        None => locate_builtin_template().ok_or_else(|| CliError::TemplateNotFound {
            path: PathBuf::from("templates").join("default"),
        }),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(
    project: &ProjectConfig,
    template_dir: &Path,
    project_root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let steps = PostGenPipeline::plan(project);

    if out.is_json() {
        out.json(&json!({
            "dry_run": true,
            "project_root": project_root.display().to_string(),
            "template": template_dir.display().to_string(),
            "steps": steps,
        }))?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        project.project_slug(),
        project_root.display(),
    ))?;
    out.info(&format!("  Template: {}", template_dir.display()))?;
    for (n, step) in steps.iter().enumerate() {
        out.print(&format!("  {}. {step}", n + 1))?;
    }
    Ok(())
}

fn describe(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Promoted { variant, .. } => variant.clone(),
        StepOutcome::Skipped(reason) => format!("skipped ({reason})"),
    }
}

fn show_summary(
    project: &ProjectConfig,
    report: &GenerationReport,
    out: &OutputManager,
) -> CliResult<()> {
    let pipeline = &report.pipeline;
    let vcs = &pipeline.vcs;

    out.success(&format!(
        "Project '{}' created at {}",
        project.project_slug(),
        report.project_root.display(),
    ))?;
    out.print(&format!("  CI service:  {}", describe(&pipeline.ci_service)))?;
    out.print(&format!("  Framework:   {}", describe(&pipeline.framework)))?;
    out.print(&format!("  Deployment:  {}", describe(&pipeline.deployment)))?;
    out.print(&format!("  Remote:      {}", vcs.remote.ssh_uri()))?;

    if vcs.name_fallback || vcs.email_fallback {
        out.warning(&format!(
            "No git identity configured; committed as {} <{}>",
            project.author().full_name,
            project.author().email,
        ))?;
    }

    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  Create the repository at {}", vcs.remote.web_url()))?;
    out.print(&format!("  cd {}", report.project_root.display()))?;
    out.print("  git push -u origin HEAD")?;
    Ok(())
}

fn outcome_json(outcome: &StepOutcome) -> serde_json::Value {
    match outcome {
        StepOutcome::Promoted { variant, entries } => json!({
            "status": "promoted",
            "variant": variant,
            "entries": entries,
        }),
        StepOutcome::Skipped(reason) => json!({
            "status": "skipped",
            "reason": reason.to_string(),
        }),
    }
}

fn report_json(project: &ProjectConfig, report: &GenerationReport) -> serde_json::Value {
    let pipeline = &report.pipeline;
    json!({
        "project_slug": project.project_slug(),
        "project_root": report.project_root.display().to_string(),
        "ci_service": outcome_json(&pipeline.ci_service),
        "framework": outcome_json(&pipeline.framework),
        "deployment": outcome_json(&pipeline.deployment),
        "remote": {
            "ssh": pipeline.vcs.remote.ssh_uri(),
            "web": pipeline.vcs.remote.web_url(),
        },
        "identity_fallback": {
            "name": pipeline.vcs.name_fallback,
            "email": pipeline.vcs.email_fallback,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
