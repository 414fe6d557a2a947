//! Layout Service - variant promotion and staging cleanup.
//!
//! The rendered template carries every optional variant under a staging
//! folder (`_/`). This service promotes the selected variant of each
//! category to the project root and finally deletes the staging folder,
//! taking every unselected variant with it.
//!
//! ```text
//! _/
//! ├── ci-services/<ci filename>/...
//! ├── frameworks/<framework>/...
//! └── deployment/<technology>/...
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Framework, ProjectConfig},
    error::SproutResult,
};

/// Staging folder holding all optional sub-trees during generation.
pub const STAGING_DIR: &str = "_";
pub const CI_SERVICES_DIR: &str = "ci-services";
pub const FRAMEWORKS_DIR: &str = "frameworks";
pub const DEPLOYMENT_DIR: &str = "deployment";

/// Why a step left the project untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The category's "none" sentinel was selected.
    NothingSelected,
    /// A framework was selected but no deployment technology is registered for it.
    NoTechnology(Framework),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingSelected => f.write_str("nothing selected"),
            Self::NoTechnology(fw) => write!(f, "no deployment technology for {fw}"),
        }
    }
}

/// Result of one conditional move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The variant's entries now live at the project root.
    Promoted { variant: String, entries: Vec<String> },
    Skipped(SkipReason),
}

impl StepOutcome {
    pub fn is_promoted(&self) -> bool {
        matches!(self, Self::Promoted { .. })
    }
}

/// Promotes selected variants out of the staging tree.
pub struct LayoutService<'a> {
    filesystem: &'a dyn Filesystem,
    project_root: PathBuf,
}

impl<'a> LayoutService<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, project_root: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            project_root: project_root.into(),
        }
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.project_root.join(STAGING_DIR)
    }

    /// Promote the selected CI service's configuration (and companion files).
    #[instrument(skip_all, fields(ci_service = %config.ci_service()))]
    pub fn set_up_ci_service(&self, config: &ProjectConfig) -> SproutResult<StepOutcome> {
        let ci = config.ci_service();
        if !ci.is_selected() {
            debug!("No CI service selected");
            return Ok(StepOutcome::Skipped(SkipReason::NothingSelected));
        }

        info!("Adding files for {} ...", ci.display_name());
        self.promote("CI service", CI_SERVICES_DIR, ci.as_str())
    }

    /// Promote the selected framework's boilerplate.
    #[instrument(skip_all, fields(framework = %config.framework()))]
    pub fn set_up_framework(&self, config: &ProjectConfig) -> SproutResult<StepOutcome> {
        let framework = config.framework();
        if !framework.is_selected() {
            debug!("No framework selected");
            return Ok(StepOutcome::Skipped(SkipReason::NothingSelected));
        }

        info!("Moving files for {} project ...", framework);
        self.promote("framework", FRAMEWORKS_DIR, framework.as_str())
    }

    /// Promote deployment configuration for the framework's technology.
    ///
    /// A missing mapping is a normal outcome: a warning is logged and the
    /// step is skipped.
    #[instrument(skip_all, fields(framework = %config.framework()))]
    pub fn set_up_deployment(&self, config: &ProjectConfig) -> SproutResult<StepOutcome> {
        let framework = config.framework();
        if !framework.is_selected() {
            warn!("Skipping deployment configuration: No framework specified.");
            return Ok(StepOutcome::Skipped(SkipReason::NothingSelected));
        }

        let Some(technology) = framework.technology() else {
            warn!(
                "Skipping deployment configuration: No deployment technology known for {}.",
                framework
            );
            return Ok(StepOutcome::Skipped(SkipReason::NoTechnology(framework)));
        };

        info!("Moving deployment configuration for {} project ...", framework);
        self.promote("deployment", DEPLOYMENT_DIR, technology.as_str())
    }

    /// Delete the staging folder and every variant still inside it.
    ///
    /// Must run after all promotions.
    #[instrument(skip_all)]
    pub fn remove_staging(&self) -> SproutResult<()> {
        let staging = self.staging_dir();
        if !self.filesystem.exists(&staging) {
            debug!(path = %staging.display(), "No staging folder to remove");
            return Ok(());
        }

        info!("Removing input data folder ...");
        self.filesystem.remove_dir_all(&staging)
    }

    /// Move every entry of `_/<category_dir>/<variant>` to the project root.
    ///
    /// The emptied variant folder stays behind for [`Self::remove_staging`].
    /// An entry that already exists at the root is a conflict, never replaced.
    fn promote(
        &self,
        category: &'static str,
        category_dir: &str,
        variant: &str,
    ) -> SproutResult<StepOutcome> {
        let source = self.staging_dir().join(category_dir).join(variant);
        if !self.filesystem.is_dir(&source) {
            return Err(ApplicationError::MissingVariant {
                category,
                variant: variant.to_string(),
                path: source,
            }
            .into());
        }

        let entries = self.filesystem.list_dir(&source)?;
        for entry in &entries {
            let from = source.join(entry);
            let to = self.project_root.join(entry);
            if self.filesystem.exists(&to) {
                return Err(ApplicationError::PromotionConflict {
                    category,
                    variant: variant.to_string(),
                    path: to,
                }
                .into());
            }
            debug!(from = %from.display(), to = %to.display(), "Promoting");
            self.filesystem.rename(&from, &to)?;
        }

        Ok(StepOutcome::Promoted {
            variant: variant.to_string(),
            entries,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}
