//! Synchronous process runner backed by `std::process::Command`.
//!
//! Commands block until they exit; no timeout is applied. A non-zero exit is
//! logged once at error level and returned as
//! [`ApplicationError::CommandFailed`] carrying the subprocess's exit code,
//! which the binary turns into its own exit status.

use std::ffi::OsString;
use std::process::{Command, ExitStatus, Output};

use tracing::{debug, error, instrument};

use sprout_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, ShellCommand},
    },
    error::SproutResult,
};

/// Message logged whenever an external command exits unsuccessfully.
pub const FAILURE_MESSAGE: &str = "Project generation failed.";

/// Runs external commands, optionally with extra environment variables.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    envs: Vec<(OsString, OsString)>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable for every command this executor spawns.
    pub fn with_env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    fn command(&self, shell_command: &ShellCommand) -> Command {
        let mut command = Command::new(shell_command.program());
        command.args(shell_command.get_args());
        if let Some(dir) = shell_command.current_dir() {
            command.current_dir(dir);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        command
    }

    fn check(
        &self,
        shell_command: &ShellCommand,
        status: ExitStatus,
        output: String,
    ) -> SproutResult<()> {
        if status.success() {
            return Ok(());
        }

        error!("{}", FAILURE_MESSAGE);
        debug!(command = %shell_command, code = ?status.code(), "Command exited unsuccessfully");
        Err(ApplicationError::CommandFailed {
            command: shell_command.to_string(),
            exit_code: status.code(),
            output,
        }
        .into())
    }
}

impl CommandRunner for ShellExecutor {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &ShellCommand) -> SproutResult<()> {
        debug!("Running");
        let status = self
            .command(command)
            .status()
            .map_err(|e| unavailable(command, e))?;
        self.check(command, status, String::new())
    }

    #[instrument(skip_all, fields(command = %command))]
    fn run_captured(&self, command: &ShellCommand) -> SproutResult<String> {
        debug!("Running (captured)");
        let output = self
            .command(command)
            .output()
            .map_err(|e| unavailable(command, e))?;

        let combined = combine(&output);
        self.check(command, output.status, combined.clone())?;
        Ok(combined)
    }
}

/// Standard output followed by standard error, decoded lossily.
fn combine(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

fn unavailable(command: &ShellCommand, e: std::io::Error) -> sprout_core::error::SproutError {
    error!("{}", FAILURE_MESSAGE);
    ApplicationError::CommandUnavailable {
        command: command.to_string(),
        reason: e.to_string(),
    }
    .into()
}
