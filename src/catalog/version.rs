//! Tool version probing.

use std::process::Command;

/// Ask a binary for its version and extract a version number from the
/// output. Any failure (spawn error, nonzero exit, no recognizable
/// version string) yields `None`.
pub fn probe_version(binary: &str, args: &[String]) -> Option<String> {
    let output = Command::new(binary).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    // Some tools print their version to stderr.
    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_version(&stdout).or_else(|| {
        let stderr = String::from_utf8_lossy(&output.stderr);
        extract_version(&stderr)
    })
}

/// Extract a version number from command output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
