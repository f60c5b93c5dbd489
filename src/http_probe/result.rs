use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};

/// Timestamp layout of C's `ctime()`, e.g. `Mon Oct  5 09:03:07 2026`.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Up,
    Down,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Up => f.write_str("UP"),
            HealthStatus::Down => f.write_str("DOWN"),
        }
    }
}

/// Why a probe was classified as DOWN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// A response arrived with a status outside the accepted set.
    StatusCode(u16),
    /// No response was obtained (connect, DNS, TLS or timeout failure).
    Error(String),
}

/// Outcome of a single probe. Rendered once into the log line via `Display`.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub url: String,
    pub timestamp: DateTime<Local>,
    pub status: HealthStatus,
    pub detail: Option<Detail>,
    pub elapsed: Duration,
}

impl ProbeResult {
    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Application is {}",
            self.timestamp.format(CTIME_FORMAT),
            self.status
        )?;
        match &self.detail {
            Some(Detail::StatusCode(code)) => write!(f, ". Status Code: {code}"),
            Some(Detail::Error(description)) => write!(f, ". Error: {description}"),
            None => Ok(()),
        }
    }
}
