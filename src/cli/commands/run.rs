//! Run command implementation.
//!
//! `toolshed run <wrapper> [args...]` executes a registered wrapper,
//! forwarding arguments to the underlying tool and propagating its exit
//! code.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::error::{Result, ToolshedError};
use crate::ui::UserInterface;
use crate::wrappers::{run_wrapper, Registrar};

use super::dispatcher::{Command, CommandResult};
use super::build_context;

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = build_context(&self.project_root, self.config_path.as_deref())?;
        let tools = ctx.catalog.tools_for_current_platform();
        let report = Registrar::new(&ctx.cache, ctx.config.registration).register(&tools);

        if let Some(wrapper) = report.find(&self.args.wrapper) {
            if wrapper.warn_on_use {
                ui.warning(&format!(
                    "{} is not on PATH; attempting '{}' anyway",
                    wrapper.tool, wrapper.program
                ));
            }
            let code = run_wrapper(wrapper, &self.args.args)?;
            return Ok(CommandResult::from_exit_code(code));
        }

        if let Some(skipped) = report.find_skipped(&self.args.wrapper) {
            ui.error(&format!(
                "Wrapper '{}' is unavailable: {} is not installed",
                self.args.wrapper, skipped.tool
            ));
            if let Some(hint) = &skipped.install_hint {
                ui.show_hint(hint);
            }
            return Ok(CommandResult::failure(1));
        }

        Err(ToolshedError::UnknownWrapper {
            name: self.args.wrapper.clone(),
        })
    }
}
