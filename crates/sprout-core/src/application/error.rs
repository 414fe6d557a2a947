//! Application layer errors.
//!
//! These errors represent failures in orchestration, not invalid
//! configuration. Configuration errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while generating or assembling a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An external command ran and exited unsuccessfully.
    #[error("Command `{command}` failed with {}", describe_exit(.exit_code))]
    CommandFailed {
        command: String,
        /// `None` when the process was killed by a signal.
        exit_code: Option<i32>,
        /// Combined stdout/stderr when the output was captured.
        output: String,
    },

    /// An external command could not be started at all.
    #[error("Command `{command}` could not be started: {reason}")]
    CommandUnavailable { command: String, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A selected variant has no folder in the staging tree.
    #[error("No staged {category} variant '{variant}' at {path}")]
    MissingVariant {
        category: &'static str,
        variant: String,
        path: PathBuf,
    },

    /// A promoted entry would replace a file already at the project root.
    #[error("Cannot promote {category} variant '{variant}': {path} already exists")]
    PromotionConflict {
        category: &'static str,
        variant: String,
        path: PathBuf,
    },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { output, .. } => {
                let mut out = vec!["Check the command output above for details".to_string()];
                if !output.trim().is_empty() {
                    out.push(format!("Output: {}", output.trim()));
                }
                out.push("The project directory was left as is; remove it before retrying".into());
                out
            }
            Self::CommandUnavailable { command, .. } => vec![
                format!("Could not run: {}", command),
                "Ensure git is installed and in your PATH".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::MissingVariant { path, .. } => vec![
                format!("Expected a folder at {}", path.display()),
                "The template does not stage this variant; check --template".into(),
            ],
            Self::PromotionConflict { path, .. } => vec![
                format!("Both the template root and the staged variant provide {}", path.display()),
                "Rename or remove one of them in the template".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project slug".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::CommandUnavailable { .. } => {
                ErrorCategory::ExternalCommand
            }
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::MissingVariant { .. } => ErrorCategory::NotFound,
            Self::PromotionConflict { .. } | Self::ProjectExists { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
