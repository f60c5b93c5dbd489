//! One-shot HTTP health probe.
//!
//! [`run`] performs a single GET against the configured URL, classifies the
//! outcome as UP or DOWN and records one timestamped line on stdout and in an
//! append-only log file. Scheduling repeated checks is left to cron or a
//! systemd timer.

pub mod config;
pub mod error;
pub mod health_log;
pub mod http_probe;

use config::{ProbeSettings, setup_http_client};
use error::AppError;
use health_log::HealthLog;
use http_probe::prelude::*;

/// Probe once and record the result.
///
/// Only local failures (client construction, writing the log file) are
/// returned as errors; an unreachable or unhealthy endpoint yields a DOWN
/// [`ProbeResult`].
pub async fn run(settings: &ProbeSettings) -> Result<ProbeResult, AppError> {
    let client = setup_http_client(settings.timeout)?;

    tracing::debug!(
        url = %settings.url,
        timeout_ms = settings.timeout.as_millis() as u64,
        accepted = ?settings.accepted_status_codes,
        "Probing"
    );
    let result = probe_url(&client, &settings.url, &settings.accepted_status_codes).await;

    match &result.detail {
        None => tracing::info!(
            url = %result.url,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Application is UP"
        ),
        Some(Detail::StatusCode(code)) => {
            tracing::warn!(url = %result.url, status = code, "Application is DOWN")
        }
        Some(Detail::Error(e)) => {
            tracing::warn!(url = %result.url, error = %e, "Application is DOWN")
        }
    }

    let log = HealthLog::new(&settings.log_file);
    log.record(&result.to_string())?;
    Ok(result)
}
