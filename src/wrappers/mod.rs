//! Conditional wrapper command registration.
//!
//! Each catalog tool declares short wrapper commands that forward to its
//! binary. The registrar consults the availability cache and either skips
//! wrappers for missing tools (reporting them with install hints) or
//! registers everything and defers the warning to call time, depending on
//! policy.

pub mod exec;
pub mod registrar;

pub use exec::run_wrapper;
pub use registrar::{RegisteredWrapper, Registrar, RegistrationReport, SkippedTool};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How to treat wrappers whose underlying tool is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationPolicy {
    /// Only register wrappers for tools that are present (capability-based
    /// exposure). Missing tools are reported with install hints.
    #[default]
    Conditional,

    /// Register every wrapper; ones for missing tools warn when invoked.
    Always,
}
