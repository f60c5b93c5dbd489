pub mod app_config;
pub mod probe_config;

pub use app_config::{Args, setup_http_client};
pub use probe_config::{DEFAULT_LOG_FILTER, ProbeSettings};
