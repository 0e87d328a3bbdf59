//! Clap derive structures for the `hookhub` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hookhub -- browse the catalog of Claude Code hooks
#[derive(Debug, Parser)]
#[command(
    name = "hookhub",
    version,
    about = "Discover and browse open-source Claude Code hooks",
    long_about = "Browse the HookHub catalog from the command line.\n\n\
        Lists hooks by category, shows hook details, and opens a hook's\n\
        repository in your browser. Uses the bundled catalog unless a\n\
        catalog file is given with --catalog or in the config file.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Catalog JSON file (overrides config; defaults to the bundled catalog)
    #[arg(long, env = "HOOKHUB_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "HOOKHUB_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto, or `defaults.color` from config]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

impl GlobalOpts {
    /// Effective output format once config defaults have been applied.
    pub fn output_format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    /// Effective color mode once config defaults have been applied.
    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
    /// Static HTML card grid (list and show only)
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List hooks, optionally narrowed to one category
    #[command(alias = "ls")]
    List(ListArgs),

    /// List the categories with the number of hooks in each
    #[command(alias = "cat")]
    Categories,

    /// Show a single hook
    Show(ShowArgs),

    /// Open a hook's repository in the default browser
    Open(OpenArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Hook Commands ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Category to show: all, formatting, security, logging,
    /// notifications, validation, workflow
    #[arg(long, short = 'c', default_value = "all")]
    pub category: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Hook id (see `hookhub list -o plain`)
    pub id: String,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Hook id (see `hookhub list -o plain`)
    pub id: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Catalog file to record in the new config
        #[arg(long = "with-catalog")]
        with_catalog: Option<PathBuf>,
    },

    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
