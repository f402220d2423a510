//! Catalog manifest types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tool the catalog knows about.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolManifest {
    /// Tool name as shown to the user (e.g., "pip").
    pub name: String,

    /// Executable lookup name, when it differs from `name` (e.g., "pip3").
    #[serde(default)]
    pub bin: Option<String>,

    /// One-line description.
    #[serde(default)]
    pub description: String,

    /// Suggested install command shown when the tool is missing.
    #[serde(default)]
    pub install_hint: Option<String>,

    /// Platforms this tool applies to. Defaults to all.
    #[serde(default = "Platform::all")]
    pub platforms: Vec<Platform>,

    /// Arguments used to ask the tool for its version.
    #[serde(default = "default_version_args")]
    pub version_args: Vec<String>,

    /// Wrapper commands registered when the tool is available.
    #[serde(default)]
    pub wrappers: Vec<WrapperDef>,
}

impl ToolManifest {
    /// The executable name to probe for.
    pub fn binary(&self) -> &str {
        self.bin.as_deref().unwrap_or(&self.name)
    }

    /// Whether this tool applies to the platform we are running on.
    pub fn supports_current_platform(&self) -> bool {
        self.platforms.iter().any(|p| p.is_current())
    }
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

/// A wrapper command: a short name that forwards to the tool binary with
/// some fixed leading arguments.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct WrapperDef {
    /// Wrapper command name (e.g., "dkps").
    pub name: String,

    /// Fixed arguments prepended before any user arguments.
    #[serde(default)]
    pub args: Vec<String>,

    /// One-line description.
    #[serde(default)]
    pub description: String,
}

/// Platform a catalog entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Macos,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Macos
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Whether this is the platform we are running on.
    pub fn is_current(&self) -> bool {
        *self == Self::current()
    }

    fn all() -> Vec<Platform> {
        vec![Platform::Macos, Platform::Linux, Platform::Windows]
    }
}

/// The catalog registry: grouping and display order for built-in tools.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogManifest {
    pub groups: Vec<GroupDef>,
}

/// A named group of tools.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupDef {
    pub name: String,
    pub tools: Vec<String>,
}
