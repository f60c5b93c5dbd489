use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Endpoint probed when neither `--url` nor `HEALTH_CHECK_URL` is given.
pub const DEFAULT_TARGET_URL: &str = "https://52.87.224.35:4499/";
pub const DEFAULT_TIMEOUT_SECONDS: &str = "5";
pub const DEFAULT_LOG_FILE: &str = "health-check.log";
pub const DEFAULT_LOG_FILTER: &str = "app_health=info";

/// Everything a single probe run needs.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// The URL of the application to be checked.
    pub url: Url,

    /// Upper bound for the whole request, connect through response headers.
    pub timeout: Duration,

    /// Append-only file receiving one line per run. Created if absent.
    pub log_file: PathBuf,

    /// Status codes that count as UP. Defaults to 200 only.
    pub accepted_status_codes: Vec<u16>,
}

impl ProbeSettings {
    pub fn new(url: Url, timeout: Duration, log_file: impl Into<PathBuf>) -> Self {
        Self {
            url,
            timeout,
            log_file: log_file.into(),
            accepted_status_codes: default_status_codes(),
        }
    }
}

pub fn default_status_codes() -> Vec<u16> {
    vec![200]
}

/// Parse a timeout given in (possibly fractional) seconds.
pub fn parse_timeout(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got `{value}`"));
    }
    let timeout = Duration::try_from_secs_f64(seconds)
        .map_err(|e| format!("timeout `{value}` is out of range: {e}"))?;
    if timeout.is_zero() {
        return Err(format!("timeout `{value}` rounds down to zero"));
    }
    Ok(timeout)
}

/// Parse and validate the target URL. Only http and https are probed.
pub fn parse_target_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value.trim()).map_err(|e| format!("invalid URL `{value}`: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported URL scheme `{other}`, expected http or https")),
    }
}

/// Parse an HTTP status code accepted as healthy.
pub fn parse_status_code(value: &str) -> Result<u16, String> {
    let code: u16 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not an HTTP status code"))?;
    if !(100..=599).contains(&code) {
        return Err(format!("status code {code} is outside 100-599"));
    }
    Ok(code)
}
