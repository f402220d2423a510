//! Executable resolution against the host PATH.
//!
//! The probe walks PATH-like directories directly rather than shelling out
//! to `which`, whose behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling. On Windows, candidate
//! names are expanded with the `PATHEXT` extension list; on Unix a file
//! must carry an execute permission bit.
//!
//! Every failure mode (missing directory, permission error on a PATH
//! entry, broken symlink) folds into "not found". Absence is a normal
//! outcome here, never an error.

use std::path::{Path, PathBuf};

/// Resolves an executable name to a runnable path.
///
/// The availability cache is constructed with a boxed probe; tests inject
/// a fake implementation to simulate arbitrary PATH states and count
/// probe calls.
pub trait ExecutableProbe: Send + Sync {
    /// Resolve `name` to the first matching executable, or `None`.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Probe backed by the real process environment.
pub struct SystemProbe {
    search_path: Vec<PathBuf>,
}

impl SystemProbe {
    /// Create a probe over the current process PATH.
    pub fn new() -> Self {
        Self {
            search_path: parse_search_path(),
        }
    }

    /// Create a probe over an explicit directory list.
    pub fn with_search_path(search_path: Vec<PathBuf>) -> Self {
        Self { search_path }
    }

    /// The directories this probe searches, in order.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutableProbe for SystemProbe {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        for dir in &self.search_path {
            for candidate in candidate_paths(dir, name) {
                if candidate.is_file() && is_executable(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Candidate file paths for `name` within `dir`.
#[cfg(not(windows))]
fn candidate_paths(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

/// On Windows, a bare name is tried with each `PATHEXT` extension; a name
/// that already carries an extension is tried as-is.
#[cfg(windows)]
fn candidate_paths(dir: &Path, name: &str) -> Vec<PathBuf> {
    if Path::new(name).extension().is_some() {
        return vec![dir.join(name)];
    }

    let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    pathext
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(|ext| dir.join(format!("{}{}", name, ext.to_lowercase())))
        .collect()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not
/// permission bits; `candidate_paths` already constrained the extension.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}
