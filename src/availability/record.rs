//! Availability records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// The cached result of probing for a single executable.
///
/// An entry is either absent from the cache (never probed, or invalidated
/// back to that state) or present as one of these records. There are no
/// other states: a probe that cannot prove presence produces a record with
/// `available: false`.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityRecord {
    /// Executable lookup name (e.g., "docker", "brew").
    pub name: String,

    /// Whether the PATH probe succeeded.
    pub available: bool,

    /// Where the executable was found, when it was.
    pub resolved_path: Option<PathBuf>,

    /// Suggested install command, surfaced when unavailable.
    pub install_hint: Option<String>,

    /// When this record was computed, for TTL invalidation.
    pub resolved_at: DateTime<Utc>,
}

impl AvailabilityRecord {
    /// Build a record for a successful probe.
    pub fn found(name: &str, path: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            available: true,
            resolved_path: Some(path),
            install_hint: None,
            resolved_at: Utc::now(),
        }
    }

    /// Build a record for a failed probe, carrying an install hint if known.
    pub fn missing(name: &str, install_hint: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            available: false,
            resolved_path: None,
            install_hint,
            resolved_at: Utc::now(),
        }
    }
}
