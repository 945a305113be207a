//! System uptime and its human-readable rendering.

use std::fs;
use std::path::Path;

use crate::error::ReadError;
use crate::types::UptimeReading;

/// Source format: two floats, "uptime_seconds idle_seconds". Only the first
/// matters here.
pub fn read_uptime(path: &Path) -> Result<UptimeReading, ReadError> {
    let text = fs::read_to_string(path)?;
    parse_uptime(&text)
}

fn parse_uptime(text: &str) -> Result<UptimeReading, ReadError> {
    let first = text
        .split_whitespace()
        .next()
        .ok_or_else(|| ReadError::Parse("empty uptime source".into()))?;
    let total_seconds: f64 = first
        .parse()
        .map_err(|_| ReadError::Parse(format!("bad uptime value {first:?}")))?;
    if !total_seconds.is_finite() || total_seconds < 0.0 {
        return Err(ReadError::Parse(format!("bad uptime value {first:?}")));
    }
    Ok(UptimeReading {
        total_seconds,
        human_readable: humanize(total_seconds),
    })
}

/// Days/hours/minutes cascade, nonzero units only, "0 minutes" floor.
/// Seconds are deliberately not shown.
fn humanize(seconds: f64) -> String {
    let total = seconds as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;

    let mut parts = Vec::new();
    for (n, unit) in [(days, "day"), (hours, "hour"), (minutes, "minute")] {
        if n == 1 {
            parts.push(format!("1 {unit}"));
        } else if n > 1 {
            parts.push(format!("{n} {unit}s"));
        }
    }
    if parts.is_empty() {
        "0 minutes".into()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn singular_units() {
        // 1 day + 1 hour + 1 minute + 1 second; the second is dropped
        assert_eq!(humanize(90_061.0), "1 day, 1 hour, 1 minute");
    }

    #[test]
    fn plural_units() {
        assert_eq!(humanize(2.0 * 86_400.0), "2 days");
        assert_eq!(humanize(2.0 * 86_400.0 + 3.0 * 3_600.0 + 900.0), "2 days, 3 hours, 15 minutes");
    }

    #[test]
    fn under_a_minute() {
        assert_eq!(humanize(45.0), "0 minutes");
        assert_eq!(humanize(0.0), "0 minutes");
    }

    #[test]
    fn zero_units_are_skipped() {
        assert_eq!(humanize(86_400.0 + 120.0), "1 day, 2 minutes");
        assert_eq!(humanize(3_600.0), "1 hour");
    }

    #[test]
    fn parses_first_field() {
        let u = parse_uptime("90061.57 345678.12\n").unwrap();
        assert_eq!(u.total_seconds, 90_061.57);
        assert_eq!(u.human_readable, "1 day, 1 hour, 1 minute");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_uptime("").is_err());
        assert!(parse_uptime("soon 123.4").is_err());
        assert!(parse_uptime("-5.0 1.0").is_err());
        assert!(parse_uptime("NaN 1.0").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "45.00 160.00").unwrap();
        let u = read_uptime(f.path()).unwrap();
        assert_eq!(u.total_seconds, 45.0);
        assert_eq!(u.human_readable, "0 minutes");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_uptime(&dir.path().join("uptime")).is_err());
    }
}
