//! The generation configuration.
//!
//! A [`ProjectConfig`] is produced once, before any pipeline step runs, and
//! is passed by reference into every step. Nothing mutates it afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::remote::VcsRemote,
    error::DomainError,
    value_objects::{CiService, Framework},
};

/// Version-control hosting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsSettings {
    /// Platform host as typed by the user, e.g. `GitHub.com`.
    pub platform: String,
    /// Account (user or organisation) on the platform.
    pub account: String,
}

/// Fallback identity used when git has none configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub full_name: String,
    pub email: String,
}

/// Comma-separated list of test environments (e.g. `flake8,pylint,py312`).
///
/// The raw text is kept verbatim because it is rendered into `tox.ini`
/// exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestMatrix(String);

impl TestMatrix {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.split(',').all(|env| env.trim().is_empty()) {
            return Err(DomainError::EmptyTestMatrix);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual environment names, trimmed, empty entries dropped.
    pub fn environments(&self) -> Vec<&str> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|env| !env.is_empty())
            .collect()
    }
}

impl Default for TestMatrix {
    fn default() -> Self {
        Self(DEFAULT_TESTS.to_string())
    }
}

impl fmt::Display for TestMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const DEFAULT_TESTS: &str = "flake8,pylint,py27,py33,py34,py35,pypy";
pub const DEFAULT_PLATFORM: &str = "GitHub.com";

/// Immutable configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    project_slug: String,
    ci_service: CiService,
    framework: Framework,
    vcs: VcsSettings,
    author: Author,
    tests: TestMatrix,
}

impl ProjectConfig {
    /// Start building a configuration for `project_slug`.
    pub fn builder(project_slug: impl Into<String>) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(project_slug)
    }

    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    pub fn ci_service(&self) -> CiService {
        self.ci_service
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn vcs(&self) -> &VcsSettings {
        &self.vcs
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn tests(&self) -> &TestMatrix {
        &self.tests
    }

    /// Remote repository derived from platform, account and slug.
    pub fn remote(&self) -> VcsRemote {
        VcsRemote::new(&self.vcs.platform, &self.vcs.account, &self.project_slug)
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ci: {}, framework: {}, vcs: {}/{})",
            self.project_slug, self.ci_service, self.framework, self.vcs.platform, self.vcs.account
        )
    }
}

/// Builder for [`ProjectConfig`]; validation happens in [`Self::build`].
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    project_slug: String,
    ci_service: CiService,
    framework: Framework,
    platform: String,
    account: Option<String>,
    full_name: Option<String>,
    email: Option<String>,
    tests: Option<String>,
}

impl ProjectConfigBuilder {
    fn new(project_slug: impl Into<String>) -> Self {
        Self {
            project_slug: project_slug.into(),
            ci_service: CiService::None,
            framework: Framework::None,
            platform: DEFAULT_PLATFORM.to_string(),
            account: None,
            full_name: None,
            email: None,
            tests: None,
        }
    }

    pub fn ci_service(mut self, ci_service: CiService) -> Self {
        self.ci_service = ci_service;
        self
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    pub fn vcs(mut self, platform: impl Into<String>, account: impl Into<String>) -> Self {
        self.platform = platform.into();
        self.account = Some(account.into());
        self
    }

    pub fn author(mut self, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self.email = Some(email.into());
        self
    }

    pub fn tests(mut self, tests: impl Into<String>) -> Self {
        self.tests = Some(tests.into());
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        validate_slug(&self.project_slug)?;

        let platform = self.platform.trim().to_string();
        if platform.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "vcs_platform",
            });
        }

        let account = self
            .account
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or(DomainError::MissingRequiredField {
                field: "vcs_account",
            })?;

        let full_name = self
            .full_name
            .filter(|n| !n.trim().is_empty())
            .ok_or(DomainError::MissingRequiredField { field: "full_name" })?;

        let email = self
            .email
            .ok_or(DomainError::MissingRequiredField { field: "email" })?;
        if !email.contains('@') || email.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidEmail(email));
        }

        let tests = match self.tests {
            Some(raw) => TestMatrix::parse(raw)?,
            None => TestMatrix::default(),
        };

        Ok(ProjectConfig {
            project_slug: self.project_slug,
            ci_service: self.ci_service,
            framework: self.framework,
            vcs: VcsSettings { platform, account },
            author: Author { full_name, email },
            tests,
        })
    }
}

fn validate_slug(slug: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectSlug {
        slug: slug.to_string(),
        reason: reason.to_string(),
    };

    if slug.is_empty() {
        return Err(invalid("cannot be empty"));
    }
    if slug.starts_with('.') {
        return Err(invalid("cannot start with '.'"));
    }
    if slug.contains('/') || slug.contains('\\') {
        return Err(invalid("cannot contain path separators"));
    }
    if slug.chars().any(char::is_whitespace) {
        return Err(invalid("cannot contain whitespace"));
    }
    Ok(())
}
