//! Environment fingerprinting.
//!
//! A cache answers for the PATH it was built against. The fingerprint is a
//! stable digest of that PATH, letting long-lived hosts notice the search
//! path drifting underneath them and invalidate accordingly.

use sha2::{Digest, Sha256};
use std::path::PathBuf;

use super::probe::parse_search_path;

/// Digest of the current process PATH.
pub fn path_fingerprint() -> String {
    fingerprint_of(&parse_search_path())
}

/// Digest of an explicit directory list.
pub fn fingerprint_of(entries: &[PathBuf]) -> String {
    let mut hasher = Sha256::new();
    for entry in entries {
        hasher.update(entry.as_os_str().as_encoded_bytes());
        // Separator so ["/a/b"] and ["/a", "b"] hash differently.
        hasher.update([0u8]);
    }
    hex::encode(&hasher.finalize()[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let entries = vec![PathBuf::from("/usr/bin"), PathBuf::from("/usr/local/bin")];
        assert_eq!(fingerprint_of(&entries), fingerprint_of(&entries));
    }

    #[test]
    fn fingerprint_depends_on_entries() {
        let a = vec![PathBuf::from("/usr/bin")];
        let b = vec![PathBuf::from("/usr/local/bin")];
        assert_ne!(fingerprint_of(&a), fingerprint_of(&b));
    }

    #[test]
    fn fingerprint_depends_on_order() {
        let a = vec![PathBuf::from("/usr/bin"), PathBuf::from("/opt/bin")];
        let b = vec![PathBuf::from("/opt/bin"), PathBuf::from("/usr/bin")];
        assert_ne!(fingerprint_of(&a), fingerprint_of(&b));
    }

    #[test]
    fn fingerprint_separates_boundaries() {
        let a = vec![PathBuf::from("/ab")];
        let b = vec![PathBuf::from("/a"), PathBuf::from("b")];
        assert_ne!(fingerprint_of(&a), fingerprint_of(&b));
    }

    #[test]
    fn empty_path_has_a_fingerprint() {
        let digest = fingerprint_of(&[]);
        assert_eq!(digest.len(), 32);
    }
}
