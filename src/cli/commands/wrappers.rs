//! Wrappers command implementation.
//!
//! `toolshed wrappers` shows the registration report: which wrapper
//! commands are active, and which tools were skipped with their install
//! hints.

use std::path::{Path, PathBuf};

use crate::cli::args::WrappersArgs;
use crate::error::Result;
use crate::ui::{Table, UserInterface};
use crate::wrappers::Registrar;

use super::dispatcher::{Command, CommandResult};
use super::build_context;

/// The wrappers command implementation.
pub struct WrappersCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: WrappersArgs,
}

impl WrappersCommand {
    /// Create a new wrappers command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: WrappersArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for WrappersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = build_context(&self.project_root, self.config_path.as_deref())?;
        let tools = ctx.catalog.tools_for_current_platform();
        let report = Registrar::new(&ctx.cache, ctx.config.registration).register(&tools);

        if self.args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?
            );
            return Ok(CommandResult::success());
        }

        ui.show_header("Wrapper commands");

        if report.registered.is_empty() {
            ui.message("No wrappers registered.");
        } else {
            let mut table = Table::new(vec!["Wrapper", "Expands to", "Tool"]);
            for wrapper in &report.registered {
                let mut name = wrapper.name.clone();
                if wrapper.warn_on_use {
                    name.push_str(" (!)");
                }
                table.add_row(vec![name, wrapper.expansion(), wrapper.tool.clone()]);
            }
            ui.message(&table.render());
        }

        if !report.skipped.is_empty() {
            ui.message("");
            ui.message("Skipped (tool not installed):");
            for skipped in &report.skipped {
                ui.message(&format!(
                    "  {} ({})",
                    skipped.tool,
                    skipped.wrappers.join(", ")
                ));
                if let Some(hint) = &skipped.install_hint {
                    ui.show_hint(hint);
                }
            }
        }

        Ok(CommandResult::success())
    }
}
