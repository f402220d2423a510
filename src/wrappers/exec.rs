//! Wrapper execution.

use std::process::Command;

use crate::error::{Result, ToolshedError};

use super::registrar::RegisteredWrapper;

/// Run a registered wrapper, forwarding `extra_args` after the wrapper's
/// fixed arguments. Stdio is inherited; the child's exit code is returned
/// so the caller can propagate it.
///
/// A nonzero child exit is not an error here; only a failure to launch
/// the binary at all is.
pub fn run_wrapper(wrapper: &RegisteredWrapper, extra_args: &[String]) -> Result<i32> {
    tracing::debug!(
        wrapper = %wrapper.name,
        program = %wrapper.program,
        "running wrapper"
    );

    let status = Command::new(&wrapper.program)
        .args(&wrapper.args)
        .args(extra_args)
        .status()
        .map_err(|source| ToolshedError::LaunchFailed {
            command: display_command(wrapper, extra_args),
            source,
        })?;

    // A signal-terminated child has no code; report generic failure.
    Ok(status.code().unwrap_or(1))
}

fn display_command(wrapper: &RegisteredWrapper, extra_args: &[String]) -> String {
    let mut parts = vec![wrapper.program.clone()];
    parts.extend(wrapper.args.iter().cloned());
    parts.extend(extra_args.iter().cloned());
    parts.join(" ")
}
