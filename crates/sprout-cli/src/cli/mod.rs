//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Project scaffolding with continuous delivery built in",
    long_about = "Sprout renders a project template, keeps only the CI service, \
                  framework and deployment setup you selected, and hands you a \
                  committed git repository with its remote already registered.",
    after_help = "EXAMPLES:\n\
        \x20 sprout new myproject --ci .travis.yml --vcs-account painless-software\n\
        \x20 sprout new flask-project --framework Flask --vcs-platform GitLab.com\n\
        \x20 sprout list\n\
        \x20 sprout completions bash > /usr/share/bash-completion/completions/sprout",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 sprout new myproject --ci .travis.yml --vcs-account painless-software\n\
            \x20 sprout new myproject --ci gitlab --vcs-platform GitLab.com --tests flake8,py312\n\
            \x20 sprout new web --framework Django --output-dir ~/src --dry-run"
    )]
    New(NewArgs),

    /// List the CI services, frameworks and deployment mappings.
    #[command(
        visible_alias = "ls",
        about = "List available choices",
        after_help = "EXAMPLES:\n\
            \x20 sprout list\n\
            \x20 sprout list ci\n\
            \x20 sprout --output-format json list"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sprout init                      # default location\n\
            \x20 sprout --config ./sprout.toml init\n\
            \x20 sprout init --force              # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprout config get defaults.vcs_account\n\
            \x20 sprout config list\n\
            \x20 sprout config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sprout new`.
///
/// Every option left out falls back to the `[defaults]` section of the
/// configuration file.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project identifier; also the name of the generated directory.
    #[arg(value_name = "PROJECT_SLUG", help = "Project identifier (directory name)")]
    pub project_slug: String,

    /// Template directory to render instead of the built-in one.
    #[arg(
        short = 't',
        long = "template",
        value_name = "DIR",
        help = "Template directory (default: built-in template)"
    )]
    pub template: Option<PathBuf>,

    /// Where the project directory is created.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Parent directory of the project (default: current directory)"
    )]
    pub output_dir: Option<PathBuf>,

    /// CI service, by configuration file name or short alias.
    #[arg(
        long = "ci",
        value_name = "SERVICE",
        help = "CI service, e.g. .travis.yml, gitlab, codeship or (none)"
    )]
    pub ci_service: Option<String>,

    /// Web framework.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "NAME",
        help = "Framework: Django, Flask, PHP-generic or (none)"
    )]
    pub framework: Option<String>,

    /// Version-control hosting platform.
    #[arg(
        long = "vcs-platform",
        value_name = "HOST",
        help = "VCS platform, e.g. GitHub.com, GitLab.com, Bitbucket.org"
    )]
    pub vcs_platform: Option<String>,

    /// Account (user or organisation) on the platform.
    #[arg(long = "vcs-account", value_name = "NAME", help = "Account on the VCS platform")]
    pub vcs_account: Option<String>,

    /// Fallback git `user.name`.
    #[arg(long = "full-name", value_name = "NAME", help = "Author name")]
    pub full_name: Option<String>,

    /// Fallback git `user.email`.
    #[arg(long = "email", value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,

    /// Comma-separated test environments rendered into `tox.ini`.
    #[arg(long = "tests", value_name = "LIST", help = "Test environments, e.g. flake8,py312")]
    pub tests: Option<String>,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be done without writing any files.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict the listing to one category.
    #[arg(value_enum, help = "Category to list (default: all)")]
    pub category: Option<ListCategory>,
}

/// Categories shown by `sprout list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListCategory {
    /// CI services.
    Ci,
    /// Web frameworks.
    Frameworks,
    /// Framework → deployment technology mappings.
    Deployment,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.vcs_account`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
