//! Locating the built-in template tree.
//!
//! Candidates are probed in this order; the first existing directory wins:
//!
//! 1. `$SPROUT_TEMPLATES_DIR/default`
//! 2. `<executable-dir>/templates/default`
//! 3. `./templates/default`
//! 4. the `templates/default` folder of the source checkout this crate was
//!    built from (development fallback)

use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable overriding the templates root.
pub const TEMPLATES_DIR_ENV: &str = "SPROUT_TEMPLATES_DIR";

/// Name of the template shipped with Sprout.
pub const DEFAULT_TEMPLATE: &str = "default";

/// Find the built-in template directory, if any candidate exists.
pub fn locate_builtin_template() -> Option<PathBuf> {
    let found = candidate_paths().into_iter().find(|p| p.is_dir());
    match &found {
        Some(path) => debug!(path = %path.display(), "Using built-in template"),
        None => debug!("No built-in template directory found"),
    }
    found
}

/// Ordered list of template directories to probe.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Some(env_dir) = std::env::var_os(TEMPLATES_DIR_ENV) {
        paths.push(PathBuf::from(env_dir).join(DEFAULT_TEMPLATE));
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join("templates").join(DEFAULT_TEMPLATE));
    }

    paths.push(PathBuf::from("templates").join(DEFAULT_TEMPLATE));
    paths.push(source_checkout_template());

    paths
}

fn source_checkout_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
        .join(DEFAULT_TEMPLATE)
}
