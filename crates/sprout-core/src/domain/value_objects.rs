//! Domain value objects: CiService, Framework, Technology.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! Each optional category carries an explicit `None` variant: the sentinel
//! meaning "nothing selected". Every other variant names exactly one
//! sub-folder of the staging tree.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `ALL` entry and the `FromStr` arm here
//! 3. Add the staged files under `templates/default/_/`
//! 4. For frameworks: add a `DeploymentDef` in `capabilities.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reserved value meaning "no selection made".
pub const NONE_SENTINEL: &str = "(none)";

// ── CiService ────────────────────────────────────────────────────────────────

/// A continuous-integration service, identified by its configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CiService {
    #[serde(rename = ".travis.yml")]
    Travis,
    #[serde(rename = ".gitlab-ci.yml")]
    GitLab,
    #[serde(rename = "codeship-steps.yml")]
    CodeshipSteps,
    #[serde(rename = "shippable.yml")]
    Shippable,
    #[serde(rename = "vexor.yml")]
    Vexor,
    #[serde(rename = "bitbucket-pipelines.yml")]
    BitbucketPipelines,
    #[serde(rename = "(none)")]
    None,
}

impl CiService {
    /// Every selectable service, sentinel excluded.
    pub const ALL: &'static [CiService] = &[
        Self::Travis,
        Self::GitLab,
        Self::CodeshipSteps,
        Self::Shippable,
        Self::Vexor,
        Self::BitbucketPipelines,
    ];

    /// Configuration filename; doubles as the staging folder name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Travis => ".travis.yml",
            Self::GitLab => ".gitlab-ci.yml",
            Self::CodeshipSteps => "codeship-steps.yml",
            Self::Shippable => "shippable.yml",
            Self::Vexor => "vexor.yml",
            Self::BitbucketPipelines => "bitbucket-pipelines.yml",
            Self::None => NONE_SENTINEL,
        }
    }

    /// Human-readable service name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Travis => "Travis CI",
            Self::GitLab => "GitLab CI",
            Self::CodeshipSteps => "Codeship",
            Self::Shippable => "Shippable",
            Self::Vexor => "Vexor",
            Self::BitbucketPipelines => "Bitbucket Pipelines",
            Self::None => "none",
        }
    }

    pub const fn is_selected(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for CiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CiService {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            ".travis.yml" | "travis" => Ok(Self::Travis),
            ".gitlab-ci.yml" | "gitlab" | "gitlab-ci" => Ok(Self::GitLab),
            "codeship-steps.yml" | "codeship" => Ok(Self::CodeshipSteps),
            "shippable.yml" | "shippable" => Ok(Self::Shippable),
            "vexor.yml" | "vexor" => Ok(Self::Vexor),
            "bitbucket-pipelines.yml" | "bitbucket" | "bitbucket-pipelines" => {
                Ok(Self::BitbucketPipelines)
            }
            NONE_SENTINEL | "none" => Ok(Self::None),
            _ => Err(DomainError::UnknownCiService(s.to_string())),
        }
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

/// A web framework whose boilerplate can be promoted into the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    Django,
    Flask,
    #[serde(rename = "PHP-generic")]
    PhpGeneric,
    #[serde(rename = "(none)")]
    None,
}

impl Framework {
    /// Every selectable framework, sentinel excluded.
    pub const ALL: &'static [Framework] = &[Self::Django, Self::Flask, Self::PhpGeneric];

    /// Framework name; doubles as the staging folder name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Django => "Django",
            Self::Flask => "Flask",
            Self::PhpGeneric => "PHP-generic",
            Self::None => NONE_SENTINEL,
        }
    }

    pub const fn is_selected(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Deployment technology for this framework, if one is registered.
    ///
    /// Delegates to `capabilities::technology_for`.
    pub fn technology(self) -> Option<Technology> {
        crate::domain::capabilities::technology_for(self)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "django" => Ok(Self::Django),
            "flask" => Ok(Self::Flask),
            "php-generic" | "php" => Ok(Self::PhpGeneric),
            NONE_SENTINEL | "none" => Ok(Self::None),
            _ => Err(DomainError::UnknownFramework(s.to_string())),
        }
    }
}

// ── Technology ───────────────────────────────────────────────────────────────

/// Runtime technology used to pick deployment configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    Python,
    Php,
}

impl Technology {
    pub const ALL: &'static [Technology] = &[Self::Python, Self::Php];

    /// Staging folder name under `deployment/`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Php => "php",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
