//! Template tree renderer.
//!
//! Walks a template directory and writes a copy into the output directory,
//! substituting `{{ cookiecutter.<name> }}` placeholders in file contents and
//! in file and directory names. Permissions are copied from the source, so
//! executable hooks stay executable.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use sprout_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::{SproutError, SproutResult},
};

use super::manifest::{MANIFEST_FILE, TemplateManifest};

/// Renders a template directory tree with [`RenderContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    /// Create a new tree renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TreeRenderer {
    #[instrument(skip_all, fields(template = %template_dir.display(), output = %output_dir.display()))]
    fn render(
        &self,
        template_dir: &Path,
        context: &RenderContext,
        output_dir: &Path,
    ) -> SproutResult<()> {
        if !template_dir.is_dir() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("template directory not found: {}", template_dir.display()),
            }
            .into());
        }

        let manifest = TemplateManifest::load(template_dir)?.unwrap_or_default();
        create_dir(output_dir)?;

        let walker = WalkDir::new(template_dir)
            .min_depth(1)
            .sort_by_file_name()
            .follow_links(false);

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::RenderingFailed {
                reason: format!("directory walk error: {e}"),
            })?;

            let relative = entry.path().strip_prefix(template_dir).map_err(|_| {
                ApplicationError::RenderingFailed {
                    reason: format!(
                        "failed to relativise '{}' against '{}'",
                        entry.path().display(),
                        template_dir.display()
                    ),
                }
            })?;
            let relative_str = normalize_path(&relative.to_string_lossy());

            if relative_str == MANIFEST_FILE {
                continue;
            }

            let target = output_dir.join(render_path(context, relative));

            let file_type = entry.file_type();
            if file_type.is_dir() {
                create_dir(&target)?;
            } else if file_type.is_file() {
                let verbatim = manifest.is_copied_verbatim(&relative_str);
                render_file(context, entry.path(), &target, verbatim)?;
            } else {
                warn!(path = %entry.path().display(), "Skipping entry that is neither file nor directory");
            }
        }

        Ok(())
    }
}

/// Render every component of a relative path.
fn render_path(context: &RenderContext, relative: &Path) -> PathBuf {
    relative
        .components()
        .map(|component| context.render(&component.as_os_str().to_string_lossy()))
        .collect()
}

fn render_file(
    context: &RenderContext,
    source: &Path,
    target: &Path,
    verbatim: bool,
) -> SproutResult<()> {
    let bytes = fs::read(source).map_err(|e| io_error(source, e, "read template file"))?;

    match String::from_utf8(bytes) {
        Ok(text) if !verbatim => {
            debug!(path = %target.display(), "Rendering");
            fs::write(target, context.render(&text))
                .map_err(|e| io_error(target, e, "write file"))?;
        }
        Ok(text) => {
            debug!(path = %target.display(), "Copying verbatim");
            fs::write(target, text).map_err(|e| io_error(target, e, "write file"))?;
        }
        Err(binary) => {
            debug!(path = %target.display(), "Copying binary file");
            fs::write(target, binary.into_bytes())
                .map_err(|e| io_error(target, e, "write file"))?;
        }
    }

    let permissions = fs::metadata(source)
        .map_err(|e| io_error(source, e, "get metadata"))?
        .permissions();
    fs::set_permissions(target, permissions).map_err(|e| io_error(target, e, "set permissions"))
}

fn create_dir(path: &Path) -> SproutResult<()> {
    fs::create_dir_all(path).map_err(|e| io_error(path, e, "create directory"))
}

fn io_error(path: &Path, e: std::io::Error, operation: &str) -> SproutError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

/// Forward slashes everywhere so manifest paths match on Windows too.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::domain::{CiService, Framework, ProjectConfig};
    use tempfile::TempDir;

    fn context() -> RenderContext {
        let config = ProjectConfig::builder("myproject")
            .ci_service(CiService::GitLab)
            .framework(Framework::Flask)
            .vcs("GitLab.com", "painless-software")
            .author("Jane Doe", "jane@example.com")
            .build()
            .unwrap();
        RenderContext::new(&config)
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn renders_contents_and_names() {
        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(tpl.path(), "README.rst", "{{ cookiecutter.project_slug }}\n");
        write(
            tpl.path(),
            "{{ cookiecutter.project_slug }}/__init__.py",
            "# {{cookiecutter.full_name}}\n",
        );

        let target = out.path().join("myproject");
        TreeRenderer::new()
            .render(tpl.path(), &context(), &target)
            .unwrap();

        assert_eq!(fs::read_to_string(target.join("README.rst")).unwrap(), "myproject\n");
        assert_eq!(
            fs::read_to_string(target.join("myproject").join("__init__.py")).unwrap(),
            "# Jane Doe\n"
        );
    }

    #[test]
    fn staging_tree_is_copied_as_is() {
        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(tpl.path(), "_/ci-services/.gitlab-ci.yml/.gitlab-ci.yml", "  script: tox\n");

        TreeRenderer::new()
            .render(tpl.path(), &context(), out.path())
            .unwrap();

        assert!(
            out.path()
                .join("_/ci-services/.gitlab-ci.yml/.gitlab-ci.yml")
                .is_file()
        );
    }

    #[test]
    fn manifest_is_not_copied_and_verbatim_paths_are_respected() {
        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(
            tpl.path(),
            MANIFEST_FILE,
            "[template]\ncopy_without_render = [\"raw\"]\n",
        );
        write(tpl.path(), "raw/page.html", "{{ cookiecutter.project_slug }}");

        TreeRenderer::new()
            .render(tpl.path(), &context(), out.path())
            .unwrap();

        assert!(!out.path().join(MANIFEST_FILE).exists());
        assert_eq!(
            fs::read_to_string(out.path().join("raw/page.html")).unwrap(),
            "{{ cookiecutter.project_slug }}"
        );
    }

    #[test]
    fn binary_files_are_copied_unchanged() {
        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let bytes = [0xff_u8, 0xfe, 0x00, 0x7b, 0x7b];
        fs::write(tpl.path().join("favicon.ico"), bytes).unwrap();

        TreeRenderer::new()
            .render(tpl.path(), &context(), out.path())
            .unwrap();

        assert_eq!(fs::read(out.path().join("favicon.ico")).unwrap(), bytes);
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_is_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(tpl.path(), ".githooks/pre-commit", "#!/bin/sh\nexit 0\n");
        let hook = tpl.path().join(".githooks/pre-commit");
        fs::set_permissions(&hook, fs::Permissions::from_mode(0o755)).unwrap();

        TreeRenderer::new()
            .render(tpl.path(), &context(), out.path())
            .unwrap();

        let mode = fs::metadata(out.path().join(".githooks/pre-commit"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn missing_template_dir_is_rendering_error() {
        let out = TempDir::new().unwrap();
        let err = TreeRenderer::new()
            .render(&out.path().join("missing"), &context(), out.path())
            .unwrap_err();
        assert!(matches!(
            err,
            SproutError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }
}
