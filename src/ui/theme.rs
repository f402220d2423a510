//! Visual theme and styling.

use console::Style;

/// Toolshed's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped/absent message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(format!("→ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = Theme::plain();
        let msg = theme.format_success("found");
        assert!(msg.contains("✓"));
        assert!(msg.contains("found"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = Theme::plain();
        let msg = theme.format_warning("careful");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("careful"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = Theme::plain();
        let msg = theme.format_error("missing");
        assert!(msg.contains("✗"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn theme_formats_skipped() {
        let theme = Theme::plain();
        let msg = theme.format_skipped("not registered");
        assert!(msg.contains("○"));
    }

    #[test]
    fn theme_formats_hint() {
        let theme = Theme::plain();
        let msg = theme.format_hint("brew install docker");
        assert!(msg.contains("→"));
        assert!(msg.contains("brew install docker"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = Theme::default();
        let new = Theme::new();
        assert_eq!(default.format_success("x"), new.format_success("x"));
    }
}
