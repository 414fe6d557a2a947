//! Optional `template.toml` manifest at the root of a template tree.
//!
//! ```toml
//! [template]
//! name        = "Painless Python"
//! description = "Python project with CI, tox and deployment boilerplate"
//!
//! # Paths (relative to the template root) copied byte-for-byte.
//! copy_without_render = ["_/frameworks/Django/application/templates"]
//! ```
//!
//! A template without a manifest renders every UTF-8 file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use sprout_core::{application::ApplicationError, error::SproutResult};

/// File name of the manifest; never copied into the generated project.
pub const MANIFEST_FILE: &str = "template.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateManifest {
    #[serde(default)]
    pub template: TemplateSection,
}

/// `[template]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateSection {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub copy_without_render: Vec<String>,
}

impl TemplateManifest {
    /// Read `template.toml` from `template_dir`, if there is one.
    pub fn load(template_dir: &Path) -> SproutResult<Option<Self>> {
        let path = template_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(|e| ApplicationError::FilesystemError {
            path: path.clone(),
            reason: format!("Failed to read manifest: {e}"),
        })?;

        toml::from_str(&raw)
            .map(Some)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    reason: format!("invalid {}: {e}", path.display()),
                }
                .into()
            })
    }

    /// Whether the file at `relative` (forward slashes) is copied verbatim.
    pub fn is_copied_verbatim(&self, relative: &str) -> bool {
        self.template.copy_without_render.iter().any(|prefix| {
            let prefix = prefix.trim_end_matches('/');
            relative == prefix
                || relative
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_manifest_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(TemplateManifest::load(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn parses_name_and_verbatim_paths() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(MANIFEST_FILE),
            "[template]\nname = \"demo\"\ncopy_without_render = [\"static/\"]\n",
        )
        .unwrap();

        let manifest = TemplateManifest::load(tmp.path()).unwrap().unwrap();
        assert_eq!(manifest.template.name.as_deref(), Some("demo"));
        assert!(manifest.is_copied_verbatim("static/app.js"));
        assert!(manifest.is_copied_verbatim("static"));
        assert!(!manifest.is_copied_verbatim("staticfiles/app.js"));
    }

    #[test]
    fn malformed_manifest_is_rendering_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), "[template\n").unwrap();

        let err = TemplateManifest::load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }
}
