//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "relay-maker",
    bin_name = "relay-maker",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create relay bundles from the bundle template",
    long_about = "relay-maker clones the relay bundle template, renames it for your \
                  vendor and bundle name, and installs it into the current project \
                  as a composer path repository.",
    after_help = "EXAMPLES:\n\
        \x20 relay-maker bundle --vendor=dbp --unique-name=greeting \\\n\
        \x20     --friendly-name='Greeting Bundle' --example-entity=greeting\n\
        \x20 relay-maker bundle --vendor=dbp --unique-name=greeting \\\n\
        \x20     --friendly-name='Greeting Bundle' --example-entity=greeting --dry-run\n\
        \x20 relay-maker completions bash > /usr/share/bash-completion/completions/relay-maker",
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
    /// Create a new bundle from the template.
    #[command(
        visible_alias = "make:bundle",
        alias = "b",
        about = "Create a new bundle",
        after_help = "EXAMPLES:\n\
            \x20 relay-maker bundle --vendor=dbp --unique-name=greeting \\\n\
            \x20     --friendly-name='Greeting Bundle' --example-entity=greeting\n\
            \x20 relay-maker bundle --vendor=acme --category=core --unique-name='base person' \\\n\
            \x20     --friendly-name='Base Person' --example-entity=person --no-confirm"
    )]
    Bundle(BundleArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 relay-maker completions bash > ~/.local/share/bash-completion/completions/relay-maker\n\
            \x20 relay-maker completions zsh  > ~/.zfunc/_relay-maker\n\
            \x20 relay-maker completions fish > ~/.config/fish/completions/relay-maker.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the relay-maker configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 relay-maker config get template.url\n\
            \x20 relay-maker config list\n\
            \x20 relay-maker config path"
    )]
    Config(ConfigCommands),
}

// ── bundle ────────────────────────────────────────────────────────────────────

/// Arguments for `relay-maker bundle`.
///
/// The required options are `Option`s on purpose: presence is checked by
/// the core (so `defaults.vendor` from the config file can fill in) and the
/// error names the missing option.
#[derive(Debug, Args)]
pub struct BundleArgs {
    /// Vendor, e.g. `dbp`.
    #[arg(long = "vendor", value_name = "VENDOR", help = "Vendor")]
    pub vendor: Option<String>,

    /// Category; `relay` unless configured otherwise.
    #[arg(
        long = "category",
        value_name = "CATEGORY",
        help = "Category [default: relay]"
    )]
    pub category: Option<String>,

    #[arg(long = "unique-name", value_name = "NAME", help = "Unique Name")]
    pub unique_name: Option<String>,

    #[arg(long = "friendly-name", value_name = "NAME", help = "Friendly Name")]
    pub friendly_name: Option<String>,

    #[arg(
        long = "example-entity",
        value_name = "ENTITY",
        help = "Example Entity"
    )]
    pub example_entity: Option<String>,

    /// Show the derived names and stop.
    #[arg(long = "dry-run", help = "Dry Run")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        long = "no-confirm",
        help = "Bypass all confirmation questions, for automation"
    )]
    pub no_confirm: bool,

    /// Host project root (defaults to the current directory).
    #[arg(
        long = "project-root",
        value_name = "DIR",
        help = "Host project root [default: current directory]"
    )]
    pub project_root: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long = "no-progress", help = "Do not show the progress bar")]
    pub no_progress: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `relay-maker completions`.
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

/// Subcommands for `relay-maker config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `template.url`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
