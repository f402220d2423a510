//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Wrap a child process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command. No subcommand means `status`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config_path = cli.config.clone();

        match &cli.command {
            Some(Commands::Status(args)) => {
                let cmd =
                    super::status::StatusCommand::new(&self.project_root, config_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd =
                    super::check::CheckCommand::new(&self.project_root, config_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Wrappers(args)) => {
                let cmd = super::wrappers::WrappersCommand::new(
                    &self.project_root,
                    config_path,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Run(args)) => {
                let cmd =
                    super::run::RunCommand::new(&self.project_root, config_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(
                    &self.project_root,
                    config_path,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::status::StatusCommand::new(
                    &self.project_root,
                    config_path,
                    crate::cli::args::StatusArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
