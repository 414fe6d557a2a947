//! Errors raised while building a `ProjectConfig` from user input.

use thiserror::Error;

/// An invalid or unknown configuration value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project slug '{slug}': {reason}")]
    InvalidProjectSlug { slug: String, reason: String },

    #[error("Unknown CI service '{0}'")]
    UnknownCiService(String),

    #[error("Unknown framework '{0}'")]
    UnknownFramework(String),

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("Test environment list is empty")]
    EmptyTestMatrix,

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectSlug { reason, .. } => vec![
                format!("The project slug {}", reason),
                "Use letters, digits, hyphens and underscores, e.g. my-project".into(),
            ],
            Self::UnknownCiService(_) => {
                let mut out = vec!["Supported CI services:".to_string()];
                out.extend(
                    crate::domain::CiService::ALL
                        .iter()
                        .map(|ci| format!("  • {}", ci.as_str())),
                );
                out.push("Try: sprout list".into());
                out
            }
            Self::UnknownFramework(_) => {
                let mut out = vec!["Supported frameworks:".to_string()];
                out.extend(
                    crate::domain::Framework::ALL
                        .iter()
                        .map(|fw| format!("  • {}", fw.as_str())),
                );
                out
            }
            Self::InvalidEmail(_) => vec![
                "The fallback git identity needs a valid email address".into(),
                "Pass --email or set defaults.email in your config file".into(),
            ],
            Self::EmptyTestMatrix => vec![
                "List at least one test environment, e.g. --tests flake8,py312".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                format!(
                    "Pass --{} or set defaults.{} in your config file",
                    field.replace('_', "-"),
                    field
                ),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCiService(_) | Self::UnknownFramework(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
