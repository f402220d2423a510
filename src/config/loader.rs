//! Configuration file discovery and loading.
//!
//! Discovery order: an explicit `--config` path wins, then the project's
//! `.toolshed/config.yml`, then `~/.toolshed/config.yml`. A missing
//! config is not an error and defaults apply; only an explicit path that
//! does not exist is.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Result, ToolshedError};

/// Where a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// Project-level `.toolshed/config.yml`.
    Project(PathBuf),
    /// User-level `~/.toolshed/config.yml`.
    User(PathBuf),
    /// No file found; defaults in effect.
    Defaults,
}

impl ConfigSource {
    /// The backing file path, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::User(p) => Some(p),
            Self::Defaults => None,
        }
    }
}

/// Load configuration for a project root.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ToolshedError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let config = parse_config_file(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    let project = project_root.join(".toolshed").join("config.yml");
    if project.exists() {
        let config = parse_config_file(&project)?;
        return Ok((config, ConfigSource::Project(project)));
    }

    if let Some(home) = dirs::home_dir() {
        let user = home.join(".toolshed").join("config.yml");
        if user.exists() {
            let config = parse_config_file(&user)?;
            return Ok((config, ConfigSource::User(user)));
        }
    }

    Ok((Config::default(), ConfigSource::Defaults))
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| ToolshedError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
