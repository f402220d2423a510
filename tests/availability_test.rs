//! Integration tests for the availability cache contract.
//!
//! These exercise the public library surface the way a long-lived host
//! would: memoized lookups, the override seam, and invalidation epochs.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use toolshed::availability::{AvailabilityCache, ExecutableProbe, SystemProbe};

/// Probe whose backing world can be edited mid-test, with a call counter.
struct ScriptedProbe {
    present: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProbe {
    fn new(present: &[&str]) -> (Self, Arc<Mutex<Vec<String>>>, Arc<AtomicUsize>) {
        let present = Arc::new(Mutex::new(
            present.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        ));
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                present: Arc::clone(&present),
                calls: Arc::clone(&calls),
            },
            present,
            calls,
        )
    }
}

impl ExecutableProbe for ScriptedProbe {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let present = self.present.lock().unwrap();
        if present.iter().any(|p| p == name) {
            Some(PathBuf::from(format!("/opt/bin/{}", name)))
        } else {
            None
        }
    }
}

#[test]
fn repeated_lookups_probe_at_most_once() {
    let (probe, _, calls) = ScriptedProbe::new(&["git"]);
    let cache = AvailabilityCache::new(Box::new(probe));

    let first = cache.is_available("git");
    let second = cache.is_available("git");

    assert_eq!(first, second);
    assert!(first);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn present_and_absent_tools_both_resolve_cleanly() {
    let (probe, _, _) = ScriptedProbe::new(&["gitX"]);
    let cache = AvailabilityCache::new(Box::new(probe));

    assert!(cache.is_available("gitX"));
    assert!(!cache.is_available("nope-tool"));

    let record = cache.lookup("gitX");
    assert_eq!(record.resolved_path, Some(PathBuf::from("/opt/bin/gitX")));
}

#[test]
fn override_forces_the_answer_regardless_of_path_state() {
    let (probe, _, calls) = ScriptedProbe::new(&["docker"]);
    let cache = AvailabilityCache::new(Box::new(probe));

    cache.set_override("docker", false);
    assert!(!cache.is_available("docker"));

    cache.set_override("docker", true);
    assert!(cache.is_available("docker"));

    // Neither answer touched the real probe.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn invalidate_reopens_the_question() {
    // setOverride("docker", false); isAvailable -> false;
    // invalidate("docker"); real probe stubbed true; isAvailable -> true.
    let (probe, _, _) = ScriptedProbe::new(&["docker"]);
    let cache = AvailabilityCache::new(Box::new(probe));

    cache.set_override("docker", false);
    assert!(!cache.is_available("docker"));

    cache.invalidate("docker");
    assert!(cache.is_available("docker"));
}

#[test]
fn invalidate_observes_a_tool_appearing_mid_run() {
    let (probe, present, calls) = ScriptedProbe::new(&[]);
    let cache = AvailabilityCache::new(Box::new(probe));

    assert!(!cache.is_available("terraform"));

    // "Install" the tool, then invalidate so the cache can see it.
    present.lock().unwrap().push("terraform".to_string());
    assert!(!cache.is_available("terraform"), "cached answer holds");

    cache.invalidate("terraform");
    assert!(cache.is_available("terraform"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn invalidate_all_resets_every_entry_and_override() {
    let (probe, present, _) = ScriptedProbe::new(&["git"]);
    let cache = AvailabilityCache::new(Box::new(probe));

    assert!(cache.is_available("git"));
    assert!(!cache.is_available("docker"));
    cache.set_override("helm", true);
    assert!(cache.is_available("helm"));

    present.lock().unwrap().push("docker".to_string());
    cache.invalidate_all();

    assert!(cache.is_available("git"));
    assert!(cache.is_available("docker"), "re-probe sees the new tool");
    assert!(!cache.is_available("helm"), "override was cleared");
}

#[test]
fn install_hints_surface_on_missing_tools_only() {
    let (probe, _, _) = ScriptedProbe::new(&["git"]);
    let mut hints = std::collections::HashMap::new();
    hints.insert("git".to_string(), "install git".to_string());
    hints.insert("docker".to_string(), "install docker".to_string());

    let cache = AvailabilityCache::new(Box::new(probe)).with_install_hints(hints);

    assert!(cache.lookup("git").install_hint.is_none());
    assert_eq!(
        cache.lookup("docker").install_hint.as_deref(),
        Some("install docker")
    );
}

#[test]
fn zero_ttl_expires_immediately() {
    let (probe, _, calls) = ScriptedProbe::new(&["git"]);
    let cache = AvailabilityCache::new(Box::new(probe)).with_ttl(chrono::Duration::zero());

    cache.is_available("git");
    cache.is_available("git");
    assert!(calls.load(Ordering::SeqCst) >= 2);
}

#[cfg(unix)]
#[test]
fn system_probe_end_to_end() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::TempDir::new().unwrap();
    let bin = temp.path().join("gitX");
    fs::write(&bin, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();

    let probe = SystemProbe::with_search_path(vec![temp.path().to_path_buf()]);
    let cache = AvailabilityCache::new(Box::new(probe));

    assert!(cache.is_available("gitX"));
    assert_eq!(cache.lookup("gitX").resolved_path, Some(bin));
    assert!(!cache.is_available("nope-tool"));
}

#[test]
fn probe_errors_fold_into_unavailable() {
    // PATH entries that do not exist, or are not directories, must not
    // panic or error; they just fail to resolve anything.
    let temp = tempfile::TempDir::new().unwrap();
    let file_entry = temp.path().join("plain-file");
    std::fs::write(&file_entry, "not a directory").unwrap();

    let probe = SystemProbe::with_search_path(vec![
        PathBuf::from("/no/such/dir"),
        file_entry,
    ]);
    let cache = AvailabilityCache::new(Box::new(probe));

    assert!(!cache.is_available("git"));
}
