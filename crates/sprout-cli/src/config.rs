//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPROUT_<SECTION>__<KEY>`, e.g.
//!    `SPROUT_DEFAULTS__VCS_ACCOUNT=painless-software`
//! 3. Config file: `--config FILE`, or `config.toml` in the platform config
//!    directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use sprout_core::domain::{CiService, DEFAULT_PLATFORM, DEFAULT_TESTS, Framework};

use crate::error::{CliError, CliResult};

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "SPROUT";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

/// Fallback values for every `sprout new` option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub full_name: String,
    pub email: String,
    pub vcs_platform: String,
    /// Empty means "must be given on the command line".
    pub vcs_account: String,
    pub ci_service: String,
    pub framework: String,
    pub tests: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template directory used instead of the built-in one.
    pub local_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                full_name: "Painless Software".into(),
                email: "info@painless.software".into(),
                vcs_platform: DEFAULT_PLATFORM.into(),
                vcs_account: String::new(),
                ci_service: CiService::Travis.as_str().into(),
                framework: Framework::None.as_str().into(),
                tests: DEFAULT_TESTS.into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            templates: TemplateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicitly given `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = config::Config::try_from(&Self::default()).map_err(config_error)?;

        config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sprout.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("software", "painless", "sprout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sprout.toml"))
    }

    /// Look up a single value by dotted key, e.g. `defaults.vcs_account`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "defaults.full_name" => self.defaults.full_name.clone(),
            "defaults.email" => self.defaults.email.clone(),
            "defaults.vcs_platform" => self.defaults.vcs_platform.clone(),
            "defaults.vcs_account" => self.defaults.vcs_account.clone(),
            "defaults.ci_service" => self.defaults.ci_service.clone(),
            "defaults.framework" => self.defaults.framework.clone(),
            "defaults.tests" => self.defaults.tests.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("Unknown config key: '{key}'"),
                    source: None,
                });
            }
        };
        Ok(value)
    }

    /// Serialise as TOML, the format of the config file.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_domain_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.vcs_platform, "GitHub.com");
        assert_eq!(cfg.defaults.framework, "(none)");
        assert_eq!(cfg.defaults.tests, DEFAULT_TESTS);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sprout.toml");
        fs::write(
            &path,
            "[defaults]\nvcs_account = \"acme\"\nframework = \"Flask\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.defaults.vcs_account, "acme");
        assert_eq!(cfg.defaults.framework, "Flask");
        // untouched keys keep their defaults
        assert_eq!(cfg.defaults.ci_service, ".travis.yml");
    }

    #[test]
    fn explicit_missing_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&tmp.path().join("missing.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sprout.toml");
        fs::write(&path, "[defaults\n").unwrap();

        assert!(matches!(
            AppConfig::load(Some(path.as_path())),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.ci_service").unwrap(), ".travis.yml");
        assert_eq!(cfg.get("output.no_color").unwrap(), "false");
        assert!(cfg.get("does.not.exist").is_err());
    }

    #[test]
    fn toml_round_trips_through_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sprout.toml");
        fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.defaults.email, "info@painless.software");
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
