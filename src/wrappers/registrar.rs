//! Wrapper registration against the availability cache.

use serde::Serialize;

use crate::availability::AvailabilityCache;
use crate::catalog::ToolManifest;

use super::RegistrationPolicy;

/// A wrapper command that made it into the active set.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredWrapper {
    /// Wrapper command name (e.g., "dkps").
    pub name: String,

    /// Owning tool name.
    pub tool: String,

    /// Binary the wrapper forwards to.
    pub program: String,

    /// Fixed arguments prepended before user arguments.
    pub args: Vec<String>,

    /// One-line description.
    pub description: String,

    /// Set when the tool was unavailable at registration time
    /// (`RegistrationPolicy::Always`): invoking the wrapper should warn.
    pub warn_on_use: bool,
}

impl RegisteredWrapper {
    /// The full command line this wrapper expands to, for display.
    pub fn expansion(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// A tool whose wrappers were skipped because it is unavailable.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedTool {
    /// Tool name.
    pub tool: String,

    /// Wrapper names that would have been registered.
    pub wrappers: Vec<String>,

    /// Suggested install command.
    pub install_hint: Option<String>,
}

/// Outcome of a registration pass over the catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationReport {
    pub registered: Vec<RegisteredWrapper>,
    pub skipped: Vec<SkippedTool>,
}

impl RegistrationReport {
    /// Find a registered wrapper by name.
    pub fn find(&self, name: &str) -> Option<&RegisteredWrapper> {
        self.registered.iter().find(|w| w.name == name)
    }

    /// Find the skipped tool that owns a wrapper name, if any.
    pub fn find_skipped(&self, name: &str) -> Option<&SkippedTool> {
        self.skipped
            .iter()
            .find(|s| s.wrappers.iter().any(|w| w == name))
    }
}

/// Builds the active wrapper set for a catalog.
pub struct Registrar<'a> {
    cache: &'a AvailabilityCache,
    policy: RegistrationPolicy,
}

impl<'a> Registrar<'a> {
    /// Create a registrar over the given cache and policy.
    pub fn new(cache: &'a AvailabilityCache, policy: RegistrationPolicy) -> Self {
        Self { cache, policy }
    }

    /// Register wrappers for the given tools.
    ///
    /// Tools without wrapper definitions contribute nothing either way.
    pub fn register(&self, tools: &[&ToolManifest]) -> RegistrationReport {
        let mut report = RegistrationReport::default();

        for tool in tools {
            if tool.wrappers.is_empty() {
                continue;
            }

            let record = self.cache.lookup(tool.binary());
            if record.available {
                self.push_wrappers(&mut report, tool, false);
            } else {
                match self.policy {
                    RegistrationPolicy::Conditional => {
                        tracing::debug!(tool = %tool.name, "skipping wrappers, tool unavailable");
                        report.skipped.push(SkippedTool {
                            tool: tool.name.clone(),
                            wrappers: tool.wrappers.iter().map(|w| w.name.clone()).collect(),
                            install_hint: record
                                .install_hint
                                .clone()
                                .or_else(|| tool.install_hint.clone()),
                        });
                    }
                    RegistrationPolicy::Always => {
                        self.push_wrappers(&mut report, tool, true);
                    }
                }
            }
        }

        report
    }

    fn push_wrappers(&self, report: &mut RegistrationReport, tool: &ToolManifest, warn: bool) {
        for def in &tool.wrappers {
            report.registered.push(RegisteredWrapper {
                name: def.name.clone(),
                tool: tool.name.clone(),
                program: tool.binary().to_string(),
                args: def.args.clone(),
                description: def.description.clone(),
                warn_on_use: warn,
            });
        }
    }
}
