//! Status command implementation.
//!
//! `toolshed status` probes every catalog tool and renders an
//! availability table.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::catalog::probe_version;
use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::{build_context, CommandContext};

/// One probed tool, for `--json` output.
#[derive(Debug, Serialize)]
struct StatusEntry {
    name: String,
    binary: String,
    available: bool,
    version: Option<String>,
    path: Option<PathBuf>,
    install_hint: Option<String>,
}

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    fn sweep(&self, ctx: &CommandContext, ui: &mut dyn UserInterface) -> Vec<StatusEntry> {
        let tools = if self.args.all {
            ctx.catalog.tools_in_order()
        } else {
            ctx.catalog.tools_for_current_platform()
        };

        let mut spinner = ui.start_spinner("Probing tools...");
        let mut entries = Vec::with_capacity(tools.len());

        for tool in tools {
            spinner.set_message(&format!("Probing {}...", tool.name));
            let record = ctx.cache.lookup(tool.binary());
            let version = if record.available {
                probe_version(tool.binary(), &tool.version_args)
            } else {
                None
            };
            entries.push(StatusEntry {
                name: tool.name.clone(),
                binary: tool.binary().to_string(),
                available: record.available,
                version,
                path: record.resolved_path,
                install_hint: record.install_hint,
            });
        }

        spinner.finish_clear();
        entries
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = build_context(&self.project_root, self.config_path.as_deref())?;
        let entries = self.sweep(&ctx, ui);

        if self.args.json {
            // Machine output goes straight to stdout, whatever the mode.
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?
            );
            return Ok(CommandResult::success());
        }

        ui.show_header("Tool availability");

        let mut table = Table::new(vec![" ", "Tool", "Version", "Location"]);
        for entry in &entries {
            let icon = if entry.available { "✓" } else { "✗" };
            let version = entry.version.clone().unwrap_or_else(|| "-".to_string());
            let location = entry
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            table.add_row(vec![
                icon.to_string(),
                entry.name.clone(),
                version,
                location,
            ]);
        }
        ui.message(&table.render());

        let available = entries.iter().filter(|e| e.available).count();
        ui.message("");
        ui.message(&format!(
            "{} of {} tools available",
            available,
            entries.len()
        ));
        if ui.output_mode().shows_detail() {
            ui.message(&format!("{} PATH probes performed", ctx.cache.probe_count()));
            if let Some(path) = ctx.source.path() {
                ui.message(&format!("config: {}", path.display()));
            }
        }

        let missing_with_hints: Vec<&StatusEntry> = entries
            .iter()
            .filter(|e| !e.available && e.install_hint.is_some())
            .collect();
        if !missing_with_hints.is_empty() {
            ui.message("");
            for entry in missing_with_hints {
                if let Some(hint) = &entry.install_hint {
                    ui.show_hint(&format!("{}: {}", entry.name, hint));
                }
            }
        }

        if ctx.cache.environment_changed() {
            ui.warning("PATH changed while probing; results may be stale");
        }

        Ok(CommandResult::success())
    }
}
