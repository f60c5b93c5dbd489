use std::time::Instant;

use chrono::Local;
use reqwest::Client;
use url::Url;

use super::prelude::*;
use super::report;

/// Classify a received status against the accepted set.
fn classify_status(status: u16, accepted_status_codes: &[u16]) -> (HealthStatus, Option<Detail>) {
    if accepted_status_codes.contains(&status) {
        (HealthStatus::Up, None)
    } else {
        (HealthStatus::Down, Some(Detail::StatusCode(status)))
    }
}

/// Issue one GET against `url` and classify the outcome.
///
/// Never fails: transport errors (connect, DNS, TLS, timeout) are turned into a
/// DOWN result carrying the flattened error chain. The timeout is whatever the
/// `client` was built with.
pub async fn probe_url(
    client: &Client,
    url: &Url,
    accepted_status_codes: &[u16],
) -> ProbeResult {
    let start = Instant::now();
    let status_result = client.get(url.clone()).send().await;
    let elapsed = start.elapsed();

    let (status, detail) = match &status_result {
        Ok(resp) => {
            tracing::debug!(
                url = %url,
                status = resp.status().as_u16(),
                version = ?resp.version(),
                "Received response"
            );
            classify_status(resp.status().as_u16(), accepted_status_codes)
        }
        Err(e) => {
            tracing::debug!(
                url = %url,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "Request failed"
            );
            (HealthStatus::Down, Some(Detail::Error(report(e))))
        }
    };

    ProbeResult {
        url: url.to_string(),
        timestamp: Local::now(),
        status,
        detail,
        elapsed,
    }
}
