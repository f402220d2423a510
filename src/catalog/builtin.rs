//! Built-in tool catalog embedded at compile time.

use include_dir::{include_dir, Dir};
use std::collections::HashMap;

use crate::error::{Result, ToolshedError};

use super::manifest::{CatalogManifest, ToolManifest};

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/catalog");

/// Load the catalog registry manifest.
pub fn load_manifest() -> Result<CatalogManifest> {
    let file = CATALOG_DIR
        .get_file("registry.yml")
        .ok_or_else(|| ToolshedError::CatalogParse {
            path: "catalog/registry.yml".into(),
            message: "missing from embedded catalog".to_string(),
        })?;

    let content = file
        .contents_utf8()
        .ok_or_else(|| ToolshedError::CatalogParse {
            path: "catalog/registry.yml".into(),
            message: "invalid UTF-8".to_string(),
        })?;

    serde_yaml::from_str(content).map_err(|e| ToolshedError::CatalogParse {
        path: "catalog/registry.yml".into(),
        message: e.to_string(),
    })
}

/// Load all built-in tool manifests, keyed by tool name.
pub fn load_tools() -> Result<HashMap<String, ToolManifest>> {
    let mut tools = HashMap::new();

    let Some(tools_dir) = CATALOG_DIR.get_dir("tools") else {
        return Ok(tools);
    };

    for group in tools_dir.dirs() {
        for file in group.files() {
            let is_yaml = file
                .path()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml");
            if !is_yaml {
                continue;
            }

            let content = file
                .contents_utf8()
                .ok_or_else(|| ToolshedError::CatalogParse {
                    path: file.path().to_path_buf(),
                    message: "invalid UTF-8".to_string(),
                })?;

            let tool: ToolManifest =
                serde_yaml::from_str(content).map_err(|e| ToolshedError::CatalogParse {
                    path: file.path().to_path_buf(),
                    message: e.to_string(),
                })?;
            tools.insert(tool.name.clone(), tool);
        }
    }

    Ok(tools)
}

/// The assembled tool catalog: built-ins plus any custom tools, minus
/// exclusions.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: HashMap<String, ToolManifest>,
    manifest: CatalogManifest,
}

impl Catalog {
    /// Load the built-in catalog.
    pub fn load() -> Result<Self> {
        Ok(Self {
            tools: load_tools()?,
            manifest: load_manifest()?,
        })
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolManifest> {
        self.tools.get(name)
    }

    /// All known tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Remove tools by name (config `exclude` list).
    pub fn exclude(&mut self, names: &[String]) {
        for name in names {
            self.tools.remove(name);
        }
    }

    /// Merge custom tool definitions over built-ins by name.
    pub fn merge_custom(&mut self, custom: Vec<ToolManifest>) {
        for tool in custom {
            self.tools.insert(tool.name.clone(), tool);
        }
    }

    /// Tools in registry order: grouped built-ins first, then anything
    /// not listed in the registry (custom tools), sorted by name.
    pub fn tools_in_order(&self) -> Vec<&ToolManifest> {
        let mut ordered = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for group in &self.manifest.groups {
            for name in &group.tools {
                if let Some(tool) = self.tools.get(name) {
                    ordered.push(tool);
                    seen.insert(name.as_str());
                }
            }
        }

        let mut rest: Vec<&ToolManifest> = self
            .tools
            .values()
            .filter(|t| !seen.contains(t.name.as_str()))
            .collect();
        rest.sort_by(|a, b| a.name.cmp(&b.name));
        ordered.extend(rest);

        ordered
    }

    /// Tools in registry order, restricted to the current platform.
    pub fn tools_for_current_platform(&self) -> Vec<&ToolManifest> {
        self.tools_in_order()
            .into_iter()
            .filter(|t| t.supports_current_platform())
            .collect()
    }

    /// Install hints keyed by executable name, for the availability cache.
    pub fn install_hints(&self) -> HashMap<String, String> {
        self.tools
            .values()
            .filter_map(|t| {
                t.install_hint
                    .as_ref()
                    .map(|hint| (t.binary().to_string(), hint.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::manifest::{Platform, WrapperDef};

    fn all_platforms() -> Vec<Platform> {
        vec![Platform::Macos, Platform::Linux, Platform::Windows]
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.get("git").is_some());
        assert!(catalog.get("docker").is_some());
        assert!(catalog.get("kubectl").is_some());
        assert!(catalog.get("no-such-tool").is_none());
    }

    #[test]
    fn builtin_tools_carry_install_hints() {
        let catalog = Catalog::load().unwrap();
        let hints = catalog.install_hints();
        assert!(hints.contains_key("docker"));
        assert!(hints["docker"].contains("docker.com"));
    }

    #[test]
    fn registry_order_starts_with_vcs_group() {
        let catalog = Catalog::load().unwrap();
        let ordered = catalog.tools_in_order();
        assert_eq!(ordered[0].name, "git");
    }

    #[test]
    fn every_registry_entry_has_a_manifest() {
        let catalog = Catalog::load().unwrap();
        for group in &catalog.manifest.groups {
            for name in &group.tools {
                assert!(
                    catalog.get(name).is_some(),
                    "registry lists '{}' but no manifest exists",
                    name
                );
            }
        }
    }

    #[test]
    fn every_manifest_is_in_the_registry() {
        let catalog = Catalog::load().unwrap();
        let listed: Vec<&String> = catalog
            .manifest
            .groups
            .iter()
            .flat_map(|g| g.tools.iter())
            .collect();
        for name in catalog.tool_names() {
            assert!(
                listed.iter().any(|l| *l == name),
                "manifest '{}' missing from registry.yml",
                name
            );
        }
    }

    #[test]
    fn exclude_removes_tools() {
        let mut catalog = Catalog::load().unwrap();
        catalog.exclude(&["docker".to_string()]);
        assert!(catalog.get("docker").is_none());
        assert!(catalog.get("git").is_some());
    }

    #[test]
    fn merge_custom_appends_after_builtins() {
        let mut catalog = Catalog::load().unwrap();
        catalog.merge_custom(vec![ToolManifest {
            name: "internal-cli".to_string(),
            bin: None,
            description: "In-house CLI".to_string(),
            install_hint: Some("Download from the intranet".to_string()),
            platforms: all_platforms(),
            version_args: vec!["--version".to_string()],
            wrappers: vec![WrapperDef {
                name: "icli".to_string(),
                args: vec![],
                description: String::new(),
            }],
        }]);

        assert!(catalog.get("internal-cli").is_some());
        let ordered = catalog.tools_in_order();
        assert_eq!(ordered.last().unwrap().name, "internal-cli");
    }

    #[test]
    fn merge_custom_overrides_builtin_by_name() {
        let mut catalog = Catalog::load().unwrap();
        catalog.merge_custom(vec![ToolManifest {
            name: "git".to_string(),
            bin: None,
            description: "Our git".to_string(),
            install_hint: Some("Use the internal mirror".to_string()),
            platforms: all_platforms(),
            version_args: vec!["--version".to_string()],
            wrappers: vec![],
        }]);

        let git = catalog.get("git").unwrap();
        assert_eq!(git.install_hint.as_deref(), Some("Use the internal mirror"));
    }

    #[test]
    fn platform_filter_drops_foreign_tools() {
        let catalog = Catalog::load().unwrap();
        let current = catalog.tools_for_current_platform();
        #[cfg(not(target_os = "windows"))]
        assert!(current.iter().all(|t| t.name != "scoop"));
        #[cfg(target_os = "windows")]
        assert!(current.iter().all(|t| t.name != "brew"));
    }
}
