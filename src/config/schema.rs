//! Configuration schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::availability::parse_ttl;
use crate::catalog::{ToolManifest, WrapperDef};
use crate::error::Result;
use crate::wrappers::RegistrationPolicy;

/// Top-level Toolshed configuration.
///
/// Every field is optional; a missing config file means defaults
/// throughout.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How long cached availability results stay fresh ("30s", "5m",
    /// "1h", "7d"). Unset means process-lifetime caching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<String>,

    /// Wrapper registration policy.
    #[serde(default)]
    pub registration: RegistrationPolicy,

    /// Built-in tools to drop from the catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Custom tools, keyed by name. A custom tool with a built-in's name
    /// replaces it.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tools: HashMap<String, CustomTool>,
}

impl Config {
    /// Parse the configured cache TTL, if any.
    pub fn ttl(&self) -> Result<Option<chrono::Duration>> {
        self.cache_ttl.as_deref().map(parse_ttl).transpose()
    }

    /// Turn the custom tool entries into catalog manifests.
    pub fn custom_manifests(&self) -> Vec<ToolManifest> {
        let mut manifests: Vec<ToolManifest> = self
            .tools
            .iter()
            .map(|(name, tool)| tool.to_manifest(name))
            .collect();
        manifests.sort_by(|a, b| a.name.cmp(&b.name));
        manifests
    }
}

/// A custom tool definition from config.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CustomTool {
    /// Executable lookup name, when it differs from the map key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,

    /// One-line description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Suggested install command shown when the tool is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,

    /// Arguments used to ask the tool for its version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_args: Option<Vec<String>>,

    /// Wrapper commands registered when the tool is available.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wrappers: Vec<WrapperDef>,
}

impl CustomTool {
    fn to_manifest(&self, name: &str) -> ToolManifest {
        ToolManifest {
            name: name.to_string(),
            bin: self.bin.clone(),
            description: self.description.clone(),
            install_hint: self.install_hint.clone(),
            platforms: vec![
                crate::catalog::Platform::Macos,
                crate::catalog::Platform::Linux,
                crate::catalog::Platform::Windows,
            ],
            version_args: self
                .version_args
                .clone()
                .unwrap_or_else(|| vec!["--version".to_string()]),
            wrappers: self.wrappers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.cache_ttl.is_none());
        assert_eq!(config.registration, RegistrationPolicy::Conditional);
        assert!(config.exclude.is_empty());
        assert!(config.tools.is_empty());
        assert!(config.ttl().unwrap().is_none());
    }

    #[test]
    fn full_config_parses() {
        let yaml = r#"
cache_ttl: 5m
registration: always
exclude: [gcloud]
tools:
  internal-cli:
    bin: icli
    install_hint: Download from the intranet
    wrappers:
      - name: ic
        args: [status]
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.ttl().unwrap(), Some(chrono::Duration::minutes(5)));
        assert_eq!(config.registration, RegistrationPolicy::Always);
        assert_eq!(config.exclude, vec!["gcloud"]);

        let manifests = config.custom_manifests();
        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0].name, "internal-cli");
        assert_eq!(manifests[0].binary(), "icli");
        assert_eq!(manifests[0].wrappers[0].args, vec!["status"]);
    }

    #[test]
    fn invalid_ttl_is_rejected_at_use() {
        let config: Config = serde_yaml::from_str("cache_ttl: whenever").unwrap();
        assert!(config.ttl().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("cache_ttk: 5m");
        assert!(result.is_err());
    }

    #[test]
    fn custom_manifests_are_sorted_by_name() {
        let yaml = r#"
tools:
  zeta: {}
  alpha: {}
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<String> = config
            .custom_manifests()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn custom_tool_version_args_default() {
        let tool = CustomTool::default();
        let manifest = tool.to_manifest("x");
        assert_eq!(manifest.version_args, vec!["--version"]);
    }

    #[test]
    fn config_schema_generates() {
        let schema = schemars::schema_for!(Config);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("cache_ttl"));
        assert!(json.contains("registration"));
    }
}
