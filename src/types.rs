//! Readings and the per-request snapshot.
//! Keep this module minimal and stable — it defines the JSON contract.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which source produced the temperature value.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TempSource {
    Primary,
    Fallback,
    Unavailable,
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct TemperatureReading {
    #[serde(rename = "cpu_temp_c")]
    pub celsius: Option<f64>,
    #[serde(rename = "cpu_temp_source")]
    pub source: TempSource,
}

impl TemperatureReading {
    pub fn unavailable() -> Self {
        Self {
            celsius: None,
            source: TempSource::Unavailable,
        }
    }
}

/// Memory figures in MB. Invariant: used + free ≈ total (within rounding).
#[derive(Debug, Serialize, Clone, Copy, Default)]
pub struct MemoryReading {
    #[serde(rename = "mem_total_mb")]
    pub total_mb: f64,
    #[serde(rename = "mem_used_mb")]
    pub used_mb: f64,
    #[serde(rename = "mem_free_mb")]
    pub free_mb: f64,
    #[serde(rename = "mem_percent_used")]
    pub percent_used: f64,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct UptimeReading {
    #[serde(rename = "uptime_seconds")]
    pub total_seconds: f64,
    #[serde(rename = "uptime_human")]
    pub human_readable: String,
}

/// One complete set of readings, built fresh for a single request and
/// discarded with the response. Serializes flat as the `/api/status` body.
#[derive(Debug, Serialize, Clone)]
pub struct StatusSnapshot {
    #[serde(flatten)]
    pub temperature: TemperatureReading,
    #[serde(flatten)]
    pub memory: MemoryReading,
    #[serde(flatten)]
    pub uptime: UptimeReading,
    pub timestamp: DateTime<Utc>,
}
