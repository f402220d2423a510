//! The memoized availability cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{Duration, Utc};

use super::fingerprint::path_fingerprint;
use super::probe::ExecutableProbe;
use super::record::AvailabilityRecord;

/// Memoized command-availability lookups with a test-override seam.
///
/// Per process lifetime and per name, the real probe runs at most once
/// unless the entry is explicitly invalidated or expires. The backing map
/// is mutex-guarded and the lock is held across the probe, so concurrent
/// first lookups for the same name still perform a single probe per
/// invalidation epoch. Probes are single filesystem scans; nothing here
/// blocks longer than that.
///
/// The cache is an owned value with an injected probe; construct one
/// wherever the application composes its services.
pub struct AvailabilityCache {
    probe: Box<dyn ExecutableProbe>,
    ttl: Option<Duration>,
    hints: HashMap<String, String>,
    fingerprint: String,
    probes: AtomicUsize,
    inner: Mutex<CacheInner>,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<String, AvailabilityRecord>,
    overrides: HashMap<String, bool>,
}

impl AvailabilityCache {
    /// Create a cache over the given probe. Entries live for the process
    /// lifetime unless a TTL is set with [`with_ttl`](Self::with_ttl).
    pub fn new(probe: Box<dyn ExecutableProbe>) -> Self {
        Self {
            probe,
            ttl: None,
            hints: HashMap::new(),
            fingerprint: path_fingerprint(),
            probes: AtomicUsize::new(0),
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Expire cached entries after `ttl`, triggering a re-probe on the
    /// next lookup.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Attach install hints (binary name to hint) stamped onto records
    /// for tools that turn out to be unavailable.
    pub fn with_install_hints(mut self, hints: HashMap<String, String>) -> Self {
        self.hints = hints;
        self
    }

    /// Whether `name` resolves to a runnable executable.
    ///
    /// Not-found is a normal `false`, never an error; probe-level I/O
    /// failures fold into `false` as well.
    pub fn is_available(&self, name: &str) -> bool {
        self.lookup(name).available
    }

    /// Full record for `name`: cached value if fresh, otherwise the
    /// result of a new probe. Overrides win over both.
    pub fn lookup(&self, name: &str) -> AvailabilityRecord {
        let mut inner = self.lock();

        if let Some(&forced) = inner.overrides.get(name) {
            return self.forced_record(name, forced);
        }

        if let Some(record) = inner.entries.get(name) {
            if !self.is_expired(record) {
                return record.clone();
            }
            tracing::debug!(tool = name, "cached entry expired, re-probing");
        }

        // Lock stays held across the probe: single-flight per name.
        let resolved = self.probe.resolve(name);
        self.probes.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(tool = name, found = resolved.is_some(), "probed PATH");

        let record = match resolved {
            Some(path) => AvailabilityRecord::found(name, path),
            None => AvailabilityRecord::missing(name, self.hints.get(name).cloned()),
        };
        inner.entries.insert(name.to_string(), record.clone());
        record
    }

    /// Force the answer for `name`, bypassing the probe. Test seam; the
    /// override holds until `invalidate`/`invalidate_all`.
    pub fn set_override(&self, name: &str, available: bool) {
        self.lock().overrides.insert(name.to_string(), available);
    }

    /// Forget everything known about `name` (the cached record and any
    /// override) so the next lookup observes the world afresh.
    pub fn invalidate(&self, name: &str) {
        let mut inner = self.lock();
        inner.entries.remove(name);
        inner.overrides.remove(name);
    }

    /// Reset every entry and override.
    pub fn invalidate_all(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.overrides.clear();
    }

    /// Number of real probes performed over this cache's lifetime.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }

    /// Whether the process PATH differs from the one captured when this
    /// cache was constructed. Long-lived hosts can use this to decide
    /// when an `invalidate_all` is warranted.
    pub fn environment_changed(&self) -> bool {
        path_fingerprint() != self.fingerprint
    }

    fn is_expired(&self, record: &AvailabilityRecord) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now() - record.resolved_at > ttl,
            None => false,
        }
    }

    fn forced_record(&self, name: &str, available: bool) -> AvailabilityRecord {
        if available {
            AvailabilityRecord {
                name: name.to_string(),
                available: true,
                resolved_path: None,
                install_hint: None,
                resolved_at: Utc::now(),
            }
        } else {
            AvailabilityRecord::missing(name, self.hints.get(name).cloned())
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still coherent for our access pattern.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
