use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use url::Url;

use super::probe_config::{
    DEFAULT_LOG_FILE, DEFAULT_TARGET_URL, DEFAULT_TIMEOUT_SECONDS, ProbeSettings,
    default_status_codes, parse_status_code, parse_target_url, parse_timeout,
};

/// One-shot HTTP health probe. Prints a timestamped UP/DOWN line and appends
/// it to a log file. Meant to be run from cron or a systemd timer.
#[derive(Parser, Debug)]
#[command(name = "app-health", version, about)]
pub struct Args {
    /// URL of the application to check
    #[arg(short, long, env = "HEALTH_CHECK_URL", default_value = DEFAULT_TARGET_URL, value_parser = parse_target_url)]
    pub url: Url,

    /// Request timeout in seconds (fractions allowed)
    #[arg(short, long, env = "HEALTH_CHECK_TIMEOUT", default_value = DEFAULT_TIMEOUT_SECONDS, value_parser = parse_timeout)]
    pub timeout: Duration,

    /// File the result line is appended to
    #[arg(short = 'f', long, env = "HEALTH_CHECK_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Status code treated as UP; repeat or comma separate for several (default: 200)
    #[arg(short, long = "accept", env = "HEALTH_CHECK_ACCEPT", value_delimiter = ',', value_parser = parse_status_code)]
    pub accepted_status_codes: Vec<u16>,

    /// Exit with status 1 when the application is DOWN
    #[arg(
        long,
        env = "HEALTH_CHECK_EXIT_CODE",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub exit_code: bool,

    /// Diagnostic log filter written to stderr (e.g. "app_health=debug")
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn probe_settings(&self) -> ProbeSettings {
        let accepted_status_codes = if self.accepted_status_codes.is_empty() {
            default_status_codes()
        } else {
            self.accepted_status_codes.clone()
        };

        ProbeSettings {
            url: self.url.clone(),
            timeout: self.timeout,
            log_file: self.log_file.clone(),
            accepted_status_codes,
        }
    }
}

/// Setup an HTTP client that accepts invalid certificates and gives up after `timeout`
pub fn setup_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .danger_accept_invalid_certs(true)
        .user_agent(concat!("app-health/", env!("CARGO_PKG_VERSION")))
        .build()
}
