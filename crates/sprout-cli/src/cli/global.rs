//! Flags shared by every `sprout` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `sprout -v new ...`
//! and `sprout new ... -v` mean the same thing.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level. The default WARN still shows skipped deployment steps and
    /// the git identity fallback.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v, -vv, -vvv)",
        long_help = "Log more about the generation pipeline:
    (none)  - Warnings: skipped deployment, git identity fallback
    -v      - Each pipeline step and the git commands it runs
    -vv     - Every promoted file and rendered path
    -vvv    - Everything, including dependency internals
RUST_LOG overrides all of these."
    )]
    pub verbose: u8,

    /// Only errors and JSON documents reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors and JSON only"
    )]
    pub quiet: bool,

    /// Also set by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Replaces the platform config file; a missing file is an error.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        env = "SPROUT_CONFIG",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print reports and listings"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of reports, listings and config values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from the config file, else human on a TTY and plain otherwise.
    #[default]
    Auto,
    /// Coloured, with status symbols.
    Human,
    /// Same text without colour.
    Plain,
    /// One JSON document on stdout.
    Json,
}
