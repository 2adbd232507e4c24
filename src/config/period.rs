//! Poll period parsing.
//!
//! Periods are written as duration strings: a sequence of decimal numbers,
//! each with a unit suffix, such as "3s", "500ms", "1m30s" or "1.5h".
//! Valid units are "ns", "us" (or "µs"), "ms", "s", "m", "h".

use std::time::Duration;

/// Period used when none is configured or the configured one is unusable.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(3);

/// Parse a duration string. Returns `None` for anything malformed.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let mut rest = input.trim();
    if rest.is_empty() {
        return None;
    }

    let mut total_nanos: f64 = 0.0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return None;
        }
        let value: f64 = rest[..number_len].parse().ok()?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let nanos_per_unit = match &rest[..unit_len] {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60.0 * 1e9,
            "h" => 3600.0 * 1e9,
            _ => return None,
        };
        rest = &rest[unit_len..];

        total_nanos += value * nanos_per_unit;
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(total_nanos as u64))
}

/// Resolve the configured poll period, falling back to [`DEFAULT_PERIOD`].
///
/// Never fails: an invalid or zero period only produces a warning.
pub fn resolve_period(input: &str) -> Duration {
    match parse_duration(input) {
        Some(period) if !period.is_zero() => period,
        _ => {
            tracing::warn!(
                period = %input,
                default_secs = DEFAULT_PERIOD.as_secs(),
                "Not a valid duration, using default period"
            );
            DEFAULT_PERIOD
        }
    }
}
