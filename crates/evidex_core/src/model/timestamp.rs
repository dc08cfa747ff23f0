//! ISO-8601 timestamp checks and display helpers.
//!
//! Fixtures carry timestamps as strings; this module only validates their
//! shape and renders them for reports. No timezone math happens here.

use once_cell::sync::Lazy;
use regex::Regex;

static ISO8601_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4}-\d{2}-\d{2})T(\d{2}:\d{2}(?::\d{2})?)(?:\.\d+)?(Z|[+-]\d{2}:\d{2})?$",
    )
    .expect("valid iso8601 regex")
});

/// Returns whether `value` looks like an ISO-8601 date-time.
pub fn is_iso8601(value: &str) -> bool {
    ISO8601_RE.is_match(value.trim())
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS <zone>` for report output.
///
/// Values that are not ISO-8601 (for example a `from to until` window) are
/// returned unchanged.
pub fn display_timestamp(value: &str) -> String {
    let trimmed = value.trim();
    let Some(caps) = ISO8601_RE.captures(trimmed) else {
        return trimmed.to_string();
    };

    let date = caps.get(1).map_or("", |m| m.as_str());
    let time = caps.get(2).map_or("", |m| m.as_str());
    let zone = match caps.get(3).map(|m| m.as_str()) {
        Some("Z") | None => "UTC",
        Some(offset) => offset,
    };
    format!("{date} {time} {zone}")
}

#[cfg(test)]
mod tests {
    use super::{display_timestamp, is_iso8601};

    #[test]
    fn accepts_common_shapes() {
        assert!(is_iso8601("2024-03-12T21:45:10Z"));
        assert!(is_iso8601("2024-03-12T21:45:10.123+05:30"));
        assert!(is_iso8601("2024-03-12T21:45"));
        assert!(!is_iso8601("12/03/2024 21:45"));
        assert!(!is_iso8601(""));
    }

    #[test]
    fn display_normalizes_zone() {
        assert_eq!(
            display_timestamp("2024-03-12T22:18:30Z"),
            "2024-03-12 22:18:30 UTC"
        );
        assert_eq!(
            display_timestamp("2024-03-12T22:18:30+05:30"),
            "2024-03-12 22:18:30 +05:30"
        );
    }

    #[test]
    fn display_passes_through_windows() {
        let window = "2024-03-12T21:00:00Z to 2024-03-12T23:30:00Z";
        assert_eq!(display_timestamp(window), window);
    }
}
