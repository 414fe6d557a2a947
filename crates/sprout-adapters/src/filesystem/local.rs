//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use sprout_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SproutError, SproutResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> SproutResult<Vec<String>> {
        let read_dir =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let name = entry.file_name().into_string().map_err(|raw| {
                SproutError::from(ApplicationError::FilesystemError {
                    path: path.join(raw),
                    reason: "entry name is not valid UTF-8".into(),
                })
            })?;
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    /// Move `from` to `to`; an existing `to` is an error rather than replaced.
    fn rename(&self, from: &Path, to: &Path) -> SproutResult<()> {
        if to.symlink_metadata().is_ok() {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Destination path already exists".into(),
            }
            .into());
        }
        std::fs::rename(from, to).map_err(|e| {
            map_io_error(from, e, &format!("move entry to '{}'", to.display()))
        })
    }

    fn remove_dir_all(&self, path: &Path) -> SproutResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SproutError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn list_dir_is_sorted_and_includes_dotfiles() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join(".travis.yml"), "").unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();

        let names = LocalFilesystem::new().list_dir(tmp.path()).unwrap();
        assert_eq!(names, vec![".travis.yml", "a", "b.txt"]);
    }

    #[test]
    fn rename_moves_directories_with_contents() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("_").join("frameworks").join("Flask").join("application");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("app.py"), "print('hi')").unwrap();

        let dest = tmp.path().join("application");
        LocalFilesystem::new().rename(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dest.join("app.py")).unwrap(), "print('hi')");
    }

    #[test]
    fn rename_missing_source_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .rename(&tmp.path().join("nope"), &tmp.path().join("dest"))
            .unwrap_err();
        assert!(matches!(
            err,
            SproutError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn rename_refuses_to_replace_existing_file() {
        let tmp = TempDir::new().unwrap();
        let root_readme = tmp.path().join("README.rst");
        fs::write(&root_readme, "root readme").unwrap();
        let staged = tmp.path().join("_").join("frameworks").join("X");
        fs::create_dir_all(&staged).unwrap();
        fs::write(staged.join("README.rst"), "framework readme").unwrap();

        let err = LocalFilesystem::new()
            .rename(&staged.join("README.rst"), &root_readme)
            .unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&root_readme).unwrap(), "root readme");
        assert!(staged.join("README.rst").is_file());
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let tmp = TempDir::new().unwrap();
        let staging = tmp.path().join("_");
        fs::create_dir_all(staging.join("ci-services").join(".gitlab-ci.yml")).unwrap();

        let fs_adapter = LocalFilesystem::new();
        fs_adapter.remove_dir_all(&staging).unwrap();
        assert!(!fs_adapter.exists(&staging));
    }

    #[test]
    fn is_dir_distinguishes_files() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file");
        fs::write(&file, "").unwrap();

        let fs_adapter = LocalFilesystem::new();
        assert!(fs_adapter.is_dir(tmp.path()));
        assert!(!fs_adapter.is_dir(&file));
        assert!(fs_adapter.exists(&file));
    }
}
