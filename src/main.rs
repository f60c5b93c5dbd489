use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_health::config::{Args, DEFAULT_LOG_FILTER};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Seed the environment from .env before clap reads HEALTH_CHECK_* fallbacks
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    // Priority: CLI > env > default. Diagnostics go to stderr, stdout only gets the result line
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = args.probe_settings();
    let result = app_health::run(&settings).await?;

    if args.exit_code && !result.is_up() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
