//! Config command implementation.
//!
//! `toolshed config` shows the resolved configuration and where it came
//! from; `--json`/`--yaml` emit it for machines, `--schema` prints the
//! JSON schema for config files.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, Config};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = schemars::schema_for!(Config);
            println!(
                "{}",
                serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?
            );
            return Ok(CommandResult::success());
        }

        let (config, source) = load_config(&self.project_root, self.config_path.as_deref())?;

        if self.args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?
            );
            return Ok(CommandResult::success());
        }

        let yaml = serde_yaml::to_string(&config).map_err(anyhow::Error::from)?;

        if self.args.yaml {
            // Machine output, like --json: no source annotation.
            println!("{}", yaml.trim_end());
            return Ok(CommandResult::success());
        }

        match source.path() {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => ui.message("# defaults (no config file found)"),
        }
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn config_shows_defaults_note_without_file() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        // Either the defaults note or the developer's own user config path.
        assert!(!ui.messages().is_empty());
        assert!(ui.messages()[0].starts_with('#'));
    }

    #[test]
    fn config_yaml_flag_skips_source_annotation() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".toolshed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "registration: always\n").unwrap();

        let cmd = ConfigCommand::new(
            temp.path(),
            None,
            ConfigArgs {
                yaml: true,
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        // The YAML body goes straight to stdout; the UI sees nothing.
        assert!(result.success);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn config_shows_project_file_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".toolshed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "registration: always\n").unwrap();

        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("config.yml"));
        assert!(ui.has_message("registration: always"));
    }
}
