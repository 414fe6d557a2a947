//! Variables handed to the template renderer.
//!
//! The renderer itself is an external collaborator (see
//! `application::ports::TemplateRenderer`); this value object is the
//! contract between the generator and whatever template engine runs.

use std::collections::BTreeMap;

use crate::domain::entities::config::ProjectConfig;

/// Namespace every template variable lives under.
pub const VARIABLE_NAMESPACE: &str = "cookiecutter";

/// Context for template rendering.
///
/// Immutable after creation; [`Self::with_variable`] consumes and returns.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `cookiecutter.project_slug` | `myproject` |
/// | `cookiecutter.ci_service` | `.travis.yml` |
/// | `cookiecutter.framework` | `Flask` |
/// | `cookiecutter.vcs_platform` | `GitHub.com` |
/// | `cookiecutter.vcs_account` | `painless-software` |
/// | `cookiecutter.full_name` | `Jane Doe` |
/// | `cookiecutter.email` | `jane@example.com` |
/// | `cookiecutter.tests` | `flake8,pylint,py35` |
/// | `cookiecutter.vcs_remote` | `git@github.com:painless-software/myproject.git` |
/// | `cookiecutter.web_url` | `https://github.com/painless-software/myproject` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(config: &ProjectConfig) -> Self {
        let remote = config.remote();
        let ctx = Self {
            variables: BTreeMap::new(),
        };

        ctx.with_variable("project_slug", config.project_slug())
            .with_variable("ci_service", config.ci_service().as_str())
            .with_variable("framework", config.framework().as_str())
            .with_variable("vcs_platform", &config.vcs().platform)
            .with_variable("vcs_account", &config.vcs().account)
            .with_variable("full_name", &config.author().full_name)
            .with_variable("email", &config.author().email)
            .with_variable("tests", config.tests().as_str())
            .with_variable("vcs_remote", remote.ssh_uri())
            .with_variable("web_url", remote.web_url())
    }

    /// Add (or override) `cookiecutter.<key>`.
    pub fn with_variable(mut self, key: &str, value: impl Into<String>) -> Self {
        self.variables
            .insert(format!("{VARIABLE_NAMESPACE}.{key}"), value.into());
        self
    }

    /// Look up a fully qualified variable, e.g. `cookiecutter.project_slug`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace `{{ name }}` placeholders (inner whitespace optional).
    ///
    /// Unknown placeholders are left untouched so that files meant for
    /// other template engines (Jinja in Django templates, for instance)
    /// survive rendering.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let name = after_open[..end].trim();
            match self.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
