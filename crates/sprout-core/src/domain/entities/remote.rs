//! Remote repository coordinates.

use std::fmt;

/// User part of the SSH remote URI.
const SSH_USER: &str = "git";

/// Where the generated project will be pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsRemote {
    platform_name: String,
    host: String,
    account: String,
    project: String,
}

impl VcsRemote {
    pub fn new(platform: &str, account: &str, project: &str) -> Self {
        Self {
            platform_name: platform.to_string(),
            host: platform.to_lowercase(),
            account: account.to_string(),
            project: project.to_string(),
        }
    }

    /// Platform exactly as configured (`GitHub.com`).
    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    /// Lower-cased platform host (`github.com`).
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// `git@<host>:<account>/<project>.git`
    pub fn ssh_uri(&self) -> String {
        format!(
            "{}@{}:{}/{}.git",
            SSH_USER, self.host, self.account, self.project
        )
    }

    /// `https://<host>/<account>/<project>`
    pub fn web_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.account, self.project)
    }
}

impl fmt::Display for VcsRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ssh_uri())
    }
}
