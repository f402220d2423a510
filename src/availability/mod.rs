//! Command availability detection and caching.
//!
//! This is the stateful heart of Toolshed: a memoized map from executable
//! name to an [`AvailabilityRecord`], populated lazily by probing the host
//! PATH and reset only by explicit invalidation (or TTL expiry). An
//! override table provides a deterministic test seam that bypasses the
//! real probe entirely.

pub mod cache;
pub mod fingerprint;
pub mod probe;
pub mod record;
pub mod ttl;

pub use cache::AvailabilityCache;
pub use fingerprint::{fingerprint_of, path_fingerprint};
pub use probe::{parse_search_path, ExecutableProbe, SystemProbe};
pub use record::AvailabilityRecord;
pub use ttl::parse_ttl;
