//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show extra detail (resolved paths, probe counts).
    Verbose,
    /// Show status and results.
    #[default]
    Normal,
    /// Suppress status output; errors still print. Exit codes carry the
    /// answer.
    Quiet,
    /// Show nothing at all, errors included.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows error messages.
    pub fn shows_errors(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows extra detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
