//! Cache TTL parsing.

use chrono::Duration;

use crate::error::{Result, ToolshedError};

/// Parse a TTL string like "7d", "24h", "30m", "45s".
///
/// A bare number is taken as seconds.
pub fn parse_ttl(ttl: &str) -> Result<Duration> {
    let ttl = ttl.trim().to_lowercase();

    let (number, unit): (&str, fn(i64) -> Duration) = if let Some(n) = ttl.strip_suffix('d') {
        (n, Duration::days)
    } else if let Some(n) = ttl.strip_suffix('h') {
        (n, Duration::hours)
    } else if let Some(n) = ttl.strip_suffix('m') {
        (n, Duration::minutes)
    } else if let Some(n) = ttl.strip_suffix('s') {
        (n, Duration::seconds)
    } else {
        (ttl.as_str(), Duration::seconds)
    };

    let n: i64 = number.parse().map_err(|_| ToolshedError::ConfigValidation {
        message: format!("invalid cache TTL '{}'", ttl),
    })?;

    if n < 0 {
        return Err(ToolshedError::ConfigValidation {
            message: format!("cache TTL must not be negative: '{}'", ttl),
        });
    }

    Ok(unit(n))
}
