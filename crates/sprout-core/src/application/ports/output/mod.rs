//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprout-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::RenderContext;
use crate::error::SproutResult;

/// An external command: program, arguments and working directory.
///
/// Commands are never passed through a shell, so arguments need no quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Shorthand for `git <args>`.
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git").args(args)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run inside `dir` instead of the process's working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Port for running external commands synchronously.
///
/// Implemented by:
/// - `sprout_adapters::process::ShellExecutor` (production)
///
/// A non-zero exit status is reported as
/// `ApplicationError::CommandFailed` carrying the subprocess's exit code.
/// Implementations never terminate the process themselves.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command`, letting its output through to the terminal.
    fn run(&self, command: &ShellCommand) -> SproutResult<()>;

    /// Run `command` and return its combined stdout/stderr.
    fn run_captured(&self, command: &ShellCommand) -> SproutResult<String>;
}

/// Port for filesystem operations on the generated project.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the entries directly inside `path`, sorted.
    fn list_dir(&self, path: &Path) -> SproutResult<Vec<String>>;

    /// Move a file or directory (not a copy).
    fn rename(&self, from: &Path, to: &Path) -> SproutResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SproutResult<()>;
}

/// Port for template rendering.
///
/// The substitution mechanism itself is an external collaborator: the
/// post-generation pipeline only ever sees its output.
///
/// Implemented by:
/// - `sprout_adapters::renderer::TreeRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render every file under `template_dir` into `output_dir`.
    ///
    /// Placeholders are substituted in file contents and in path names.
    fn render(
        &self,
        template_dir: &Path,
        context: &RenderContext,
        output_dir: &Path,
    ) -> SproutResult<()>;
}
