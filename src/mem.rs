//! Memory figures from a meminfo-style `Label: value kB` source.

use std::fs;
use std::path::Path;

use crate::error::ReadError;
use crate::types::MemoryReading;

pub fn read_memory(path: &Path) -> Result<MemoryReading, ReadError> {
    let text = fs::read_to_string(path)?;
    parse_meminfo(&text)
}

fn parse_meminfo(text: &str) -> Result<MemoryReading, ReadError> {
    let mut total_kb: Option<u64> = None;
    let mut available_kb: Option<u64> = None;
    let mut free_kb: Option<u64> = None;

    for line in text.lines() {
        let Some((label, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match label.trim() {
            "MemTotal" => &mut total_kb,
            "MemAvailable" => &mut available_kb,
            "MemFree" => &mut free_kb,
            _ => continue,
        };
        *slot = rest.split_whitespace().next().and_then(|v| v.parse().ok());
    }

    let total_kb =
        total_kb.ok_or_else(|| ReadError::Parse("MemTotal missing or malformed".into()))?;
    // Old kernels lack MemAvailable; MemFree is the documented substitute.
    let avail_kb = available_kb
        .or(free_kb)
        .ok_or_else(|| ReadError::Parse("neither MemAvailable nor MemFree present".into()))?;
    let used_kb = total_kb.saturating_sub(avail_kb);

    let percent_used = if total_kb > 0 {
        round1(used_kb as f64 / total_kb as f64 * 100.0)
    } else {
        0.0
    };

    Ok(MemoryReading {
        total_mb: round2(total_kb as f64 / 1024.0),
        used_mb: round2(used_kb as f64 / 1024.0),
        free_mb: round2(avail_kb as f64 / 1024.0),
        percent_used,
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
