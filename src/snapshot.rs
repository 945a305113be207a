//! Assembles one complete snapshot per request, tolerating partial failure.

use chrono::Utc;
use tracing::warn;

use crate::state::MetricSources;
use crate::types::{MemoryReading, StatusSnapshot, UptimeReading};
use crate::{mem, temp, uptime};

/// Collect all three readings. A failed reader is logged and replaced with
/// zeroed values; it never aborts the other readers or the request.
pub async fn collect_snapshot(sources: &MetricSources) -> StatusSnapshot {
    let temperature = temp::read_temperature(sources).await;

    let memory = match mem::read_memory(&sources.meminfo) {
        Ok(m) => m,
        Err(e) => {
            warn!("memory reading unavailable: {e}");
            MemoryReading::default()
        }
    };

    let uptime = match uptime::read_uptime(&sources.uptime) {
        Ok(u) => u,
        Err(e) => {
            warn!("uptime reading unavailable: {e}");
            UptimeReading::default()
        }
    };

    StatusSnapshot {
        temperature,
        memory,
        uptime,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TempSource;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;

    fn sources_in(dir: &Path) -> MetricSources {
        MetricSources {
            thermal_zone: dir.join("temp"),
            meminfo: dir.join("meminfo"),
            uptime: dir.join("uptime"),
            fallback_cmd: vec!["false".into()],
            fallback_timeout: Duration::from_millis(500),
        }
    }

    #[tokio::test]
    async fn survives_memory_and_uptime_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("temp"), "51000\n").unwrap();

        let snap = collect_snapshot(&sources_in(dir.path())).await;
        assert_eq!(snap.temperature.celsius, Some(51.0));
        assert_eq!(snap.temperature.source, TempSource::Primary);
        assert_eq!(snap.memory.total_mb, 0.0);
        assert_eq!(snap.memory.percent_used, 0.0);
        assert_eq!(snap.uptime.total_seconds, 0.0);
        assert_eq!(snap.uptime.human_readable, "");
    }

    #[tokio::test]
    async fn survives_everything_missing() {
        let dir = tempfile::tempdir().unwrap();
        let snap = collect_snapshot(&sources_in(dir.path())).await;
        assert_eq!(snap.temperature.celsius, None);
        assert_eq!(snap.temperature.source, TempSource::Unavailable);
    }

    #[tokio::test]
    async fn json_contract_holds_under_failure() {
        let dir = tempfile::tempdir().unwrap();
        let snap = collect_snapshot(&sources_in(dir.path())).await;
        let v = serde_json::to_value(&snap).unwrap();

        for key in [
            "cpu_temp_c",
            "cpu_temp_source",
            "mem_total_mb",
            "mem_used_mb",
            "mem_free_mb",
            "mem_percent_used",
            "uptime_seconds",
            "uptime_human",
            "timestamp",
        ] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
        assert!(v["cpu_temp_c"].is_null());
        assert_eq!(v["cpu_temp_source"], "unavailable");
        assert!(v["timestamp"].is_string());
    }

    #[tokio::test]
    async fn healthy_sources_fill_every_field() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("temp"), "48234\n").unwrap();
        fs::write(
            dir.path().join("meminfo"),
            "MemTotal: 16384000 kB\nMemAvailable: 8192000 kB\n",
        )
        .unwrap();
        fs::write(dir.path().join("uptime"), "90061.57 345678.12\n").unwrap();

        let snap = collect_snapshot(&sources_in(dir.path())).await;
        assert_eq!(snap.temperature.celsius, Some(48.234));
        assert_eq!(snap.memory.used_mb, 8000.0);
        assert_eq!(snap.uptime.human_readable, "1 day, 1 hour, 1 minute");
    }
}
