//! VCS Service - repository initialisation and hook configuration.
//!
//! Every step goes through the [`CommandRunner`] port; a failing git call
//! aborts the whole sequence with no rollback.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{CommandRunner, ShellCommand},
    domain::{ProjectConfig, VcsRemote},
    error::SproutResult,
};

/// Message of the first commit in every generated repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit by Sprout";

/// Name of the registered remote.
pub const REMOTE_NAME: &str = "origin";

/// Hook directory, relative to the project root.
pub const HOOKS_PATH: &str = ".githooks";

const EMAIL_KEY: &str = "user.email";
const NAME_KEY: &str = "user.name";

/// What `init_version_control` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsReport {
    pub remote: VcsRemote,
    /// Fallback `user.email` was written to the repository config.
    pub email_fallback: bool,
    /// Fallback `user.name` was written to the repository config.
    pub name_fallback: bool,
}

/// Drives git inside the generated project.
pub struct VcsService<'a> {
    runner: &'a dyn CommandRunner,
    project_root: PathBuf,
}

impl<'a> VcsService<'a> {
    pub fn new(runner: &'a dyn CommandRunner, project_root: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            project_root: project_root.into(),
        }
    }

    /// Initialise a repository, commit everything and register the remote.
    ///
    /// Steps, each a prerequisite for the next:
    /// 1. `git init`
    /// 2. `git add .`
    /// 3. fall back to the configured identity for whichever of
    ///    `user.email` / `user.name` git does not know yet
    /// 4. commit
    /// 5. `git remote add origin git@<host>:<account>/<project>.git`
    #[instrument(skip_all, fields(project = %config.project_slug()))]
    pub fn init_version_control(&self, config: &ProjectConfig) -> SproutResult<VcsReport> {
        let remote = config.remote();

        info!("Initializing version control ...");
        self.runner.run(&self.git(["init", "--quiet"]))?;
        self.runner.run(&self.git(["add", "."]))?;

        let known = self.runner.run_captured(&self.git(["config", "--list"]))?;

        let email_fallback = !has_key(&known, EMAIL_KEY);
        if email_fallback {
            warn!(
                "I need to add {}. BEWARE! Check with: git config --list",
                EMAIL_KEY
            );
            self.runner
                .run(&self.git(["config", EMAIL_KEY, config.author().email.as_str()]))?;
        }

        let name_fallback = !has_key(&known, NAME_KEY);
        if name_fallback {
            warn!(
                "I need to add {}. BEWARE! Check with: git config --list",
                NAME_KEY
            );
            self.runner
                .run(&self.git(["config", NAME_KEY, config.author().full_name.as_str()]))?;
        }

        self.runner
            .run(&self.git(["commit", "--quiet", "-m", INITIAL_COMMIT_MESSAGE]))?;

        let uri = remote.ssh_uri();
        self.runner
            .run(&self.git(["remote", "add", REMOTE_NAME, uri.as_str()]))?;

        info!(
            "You can now create a project '{}' on {}. {}",
            remote.project(),
            remote.platform_name(),
            remote.web_url()
        );
        info!("Then push the code to it: $ git push -u {} --all", REMOTE_NAME);

        Ok(VcsReport {
            remote,
            email_fallback,
            name_fallback,
        })
    }

    /// Point `core.hooksPath` at the project's hook directory.
    ///
    /// Idempotent: git simply overwrites the value.
    #[instrument(skip_all)]
    pub fn set_hook_path(&self) -> SproutResult<()> {
        self.runner
            .run(&self.git(["config", "core.hooksPath", HOOKS_PATH]))?;
        info!("Setting the git hook dir to {}", HOOKS_PATH);
        Ok(())
    }

    fn git<const N: usize>(&self, args: [&str; N]) -> ShellCommand {
        ShellCommand::git(args).in_dir(&self.project_root)
    }
}

/// Whether `git config --list` output defines `key`.
fn has_key(config_list: &str, key: &str) -> bool {
    config_list
        .lines()
        .filter_map(|line| line.split_once('='))
        .any(|(k, _)| k.trim().eq_ignore_ascii_case(key))
}
