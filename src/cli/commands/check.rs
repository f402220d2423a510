//! Check command implementation.
//!
//! `toolshed check <tool>` answers with the exit code: 0 when the tool is
//! available, 1 when it is not. Works for catalog tools (which contribute
//! binary names and install hints) and for arbitrary executable names.

use std::path::{Path, PathBuf};

use crate::catalog::probe_version;
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::build_context;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = build_context(&self.project_root, self.config_path.as_deref())?;

        let (binary, version_args) = match ctx.catalog.get(&self.args.tool) {
            Some(tool) => (tool.binary().to_string(), tool.version_args.clone()),
            None => (self.args.tool.clone(), vec!["--version".to_string()]),
        };

        let record = ctx.cache.lookup(&binary);

        if self.args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&record).map_err(anyhow::Error::from)?
            );
            return Ok(if record.available {
                CommandResult::success()
            } else {
                CommandResult::failure(1)
            });
        }

        if record.available {
            let mut msg = format!("{} is available", self.args.tool);
            if let Some(version) = probe_version(&binary, &version_args) {
                msg.push_str(&format!(" ({})", version));
            }
            ui.success(&msg);

            if ui.output_mode().shows_detail() {
                if let Some(path) = &record.resolved_path {
                    ui.message(&format!("  resolved to {}", path.display()));
                }
            }
            Ok(CommandResult::success())
        } else {
            ui.error(&format!("{} was not found on PATH", self.args.tool));
            if let Some(hint) = &record.install_hint {
                ui.show_hint(hint);
            }
            Ok(CommandResult::failure(1))
        }
    }
}
