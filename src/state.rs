//! Shared server state: where the readers look, plus the host name.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Locations of the kernel text sources and the fallback utility.
/// Held as plain data so tests can point readers at temp files or stub
/// commands instead of the live system.
#[derive(Debug, Clone)]
pub struct MetricSources {
    pub thermal_zone: PathBuf,
    pub meminfo: PathBuf,
    pub uptime: PathBuf,
    /// Program + args printing a `temp=XX.X'C` line on stdout.
    pub fallback_cmd: Vec<String>,
    pub fallback_timeout: Duration,
}

impl Default for MetricSources {
    fn default() -> Self {
        Self {
            thermal_zone: PathBuf::from("/sys/class/thermal/thermal_zone0/temp"),
            meminfo: PathBuf::from("/proc/meminfo"),
            uptime: PathBuf::from("/proc/uptime"),
            fallback_cmd: vec!["vcgencmd".into(), "measure_temp".into()],
            fallback_timeout: Duration::from_secs(2),
        }
    }
}

/// Read-only across requests, so no locking is needed here.
#[derive(Clone)]
pub struct AppState {
    pub sources: Arc<MetricSources>,
    pub hostname: Arc<str>,
}
