//! External process adapters.

mod shell;

pub use shell::{FAILURE_MESSAGE, ShellExecutor};
