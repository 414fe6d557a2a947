//! Shared sandbox for tests that drive the `sprout` binary.
//!
//! Every invocation runs inside a fresh temporary directory with its own
//! `HOME`, config directory and git configuration, so neither the developer's
//! settings nor other tests leak in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const ACCOUNT: &str = "painless-software";
pub const TESTS: &str = "flake8,pylint,py27,py33,py34,py35,pypy";

/// Templates root of this workspace (the parent of `default/`).
pub fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

/// Reference copies of files the template must keep producing verbatim.
pub fn mother_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/mother")
        .join(name)
}

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitconfig"), "").unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory passed as `--output-dir`.
    pub fn out(&self) -> PathBuf {
        self.path().join("out")
    }

    pub fn project(&self, slug: &str) -> PathBuf {
        self.out().join(slug)
    }

    /// Replace the sandbox's global git configuration.
    pub fn git_config(&self, contents: &str) {
        fs::write(self.path().join(".gitconfig"), contents).unwrap();
    }

    /// `sprout` with an isolated environment.
    pub fn sprout(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("sprout");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("GIT_CONFIG_GLOBAL", self.path().join(".gitconfig"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("SPROUT_TEMPLATES_DIR", templates_root())
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .env_remove("SPROUT_CONFIG")
            .env_remove("GIT_AUTHOR_NAME")
            .env_remove("GIT_AUTHOR_EMAIL")
            .env_remove("GIT_COMMITTER_NAME")
            .env_remove("GIT_COMMITTER_EMAIL");
        cmd
    }

    /// `sprout new <slug>` into [`Self::out`] with the account already set.
    pub fn new_project(&self, slug: &str) -> Command {
        let mut cmd = self.sprout();
        cmd.arg("new")
            .arg(slug)
            .arg("--output-dir")
            .arg(self.out())
            .args(["--vcs-account", ACCOUNT]);
        cmd
    }
}

/// Lines of a text file, line endings stripped.
pub fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
        .lines()
        .map(str::to_owned)
        .collect()
}
