//! CPU temperature: sysfs thermal zone first, vendor utility fallback.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::error::ReadError;
use crate::state::MetricSources;
use crate::types::{TempSource, TemperatureReading};

/// Never fails: a reading with `source=unavailable` is the worst case.
pub async fn read_temperature(sources: &MetricSources) -> TemperatureReading {
    if let Some(celsius) = read_thermal_zone(&sources.thermal_zone) {
        return TemperatureReading {
            celsius: Some(celsius),
            source: TempSource::Primary,
        };
    }

    match run_fallback(&sources.fallback_cmd, sources.fallback_timeout).await {
        Ok(out) => match parse_fallback_output(&out) {
            Some(celsius) => TemperatureReading {
                celsius: Some(celsius),
                source: TempSource::Fallback,
            },
            None => {
                debug!("temperature fallback printed unparseable output: {out:?}");
                TemperatureReading::unavailable()
            }
        },
        Err(e) => {
            debug!("temperature fallback failed: {e}");
            TemperatureReading::unavailable()
        }
    }
}

/// Thermal zone files hold integer millidegrees ("48234\n"). Zero is a
/// legitimate value, not a failure.
fn read_thermal_zone(path: &Path) -> Option<f64> {
    let raw = fs::read_to_string(path).ok()?;
    let milli: i64 = raw.trim().parse().ok()?;
    Some(milli as f64 / 1000.0)
}

/// Run the fallback utility and capture stdout, with a hard timeout so a
/// hung utility cannot stall the request.
async fn run_fallback(cmd: &[String], limit: Duration) -> Result<String, ReadError> {
    let (program, args) = cmd
        .split_first()
        .ok_or_else(|| ReadError::Parse("empty fallback command".into()))?;

    let mut command = Command::new(program);
    command.args(args).kill_on_drop(true);

    let out = timeout(limit, command.output())
        .await
        .map_err(|_| ReadError::Timeout)??;

    if !out.status.success() {
        return Err(ReadError::CommandFailed(out.status.to_string()));
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Expected shape: `temp=48.2'C` (trailing newline tolerated). The value
/// sits between `=` and the `'` unit marker.
fn parse_fallback_output(out: &str) -> Option<f64> {
    let rest = out.trim().strip_prefix("temp=")?;
    let value = rest.split('\'').next()?;
    value.trim().parse().ok()
}
