//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Toolshed - developer tool availability detection.
#[derive(Debug, Parser)]
#[command(name = "toolshed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .toolshed/config.yml discovery)
    #[arg(short, long, global = true, env = "TOOLSHED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show extra detail (resolved paths, probe counts)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status output; exit codes carry the answer
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Suppress all output, errors included
    #[arg(long, global = true)]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the catalog and show tool availability (default)
    Status(StatusArgs),

    /// Check a single tool; exit 0 when available, 1 when not
    Check(CheckArgs),

    /// Show wrapper commands: registered and skipped
    Wrappers(WrappersArgs),

    /// Run a registered wrapper, forwarding arguments
    Run(RunArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Include tools for other platforms
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Tool to check (catalog name, or any executable name)
    pub tool: String,

    /// Output the availability record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `wrappers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WrappersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Wrapper command name
    pub wrapper: String,

    /// Arguments forwarded to the underlying tool
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output as YAML (the default rendering)
    #[arg(long, conflicts_with = "json")]
    pub yaml: bool,

    /// Print the config JSON schema instead
    #[arg(long)]
    pub schema: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
