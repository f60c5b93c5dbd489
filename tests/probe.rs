use std::net::TcpListener;
use std::path::Path;
use std::time::{Duration, Instant};

use app_health::config::ProbeSettings;
use app_health::config::probe_config::parse_target_url;
use app_health::http_probe::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(url: &str, timeout: Duration, log_file: &Path) -> ProbeSettings {
    let url = parse_target_url(url).expect("valid test URL");
    ProbeSettings::new(url, timeout, log_file)
}

/// Drop the `[<timestamp>] ` prefix, asserting it is present.
fn without_timestamp(line: &str) -> &str {
    assert!(line.starts_with('['), "line should start with a timestamp: {line}");
    let end = line.find("] ").expect("timestamp should be closed");
    &line[end + 2..]
}

fn log_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("log file should exist")
        .lines()
        .map(str::to_string)
        .collect()
}

async fn server_returning(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn healthy_endpoint_is_up() {
    let server = server_returning(200).await;
    let dir = tempfile::tempdir().expect("temp dir");
    let log_file = dir.path().join("health-check.log");
    let settings = settings_for(
        &format!("{}/health", server.uri()),
        Duration::from_secs(5),
        &log_file,
    );

    let result = app_health::run(&settings).await.expect("probe runs");

    assert_eq!(result.status, HealthStatus::Up);
    assert_eq!(result.detail, None);
    let lines = log_lines(&log_file);
    assert_eq!(lines.len(), 1);
    assert_eq!(without_timestamp(&lines[0]), "Application is UP");
    assert_eq!(lines[0], result.to_string());
}

#[tokio::test]
async fn unavailable_endpoint_reports_status_code() {
    let server = server_returning(503).await;
    let dir = tempfile::tempdir().expect("temp dir");
    let log_file = dir.path().join("health-check.log");
    let settings = settings_for(
        &format!("{}/health", server.uri()),
        Duration::from_secs(5),
        &log_file,
    );

    let result = app_health::run(&settings).await.expect("probe runs");

    assert_eq!(result.status, HealthStatus::Down);
    assert_eq!(result.detail, Some(Detail::StatusCode(503)));
    let lines = log_lines(&log_file);
    assert_eq!(without_timestamp(&lines[0]), "Application is DOWN. Status Code: 503");
}

#[tokio::test]
async fn accepted_status_codes_are_configurable() {
    let server = server_returning(204).await;
    let dir = tempfile::tempdir().expect("temp dir");
    let log_file = dir.path().join("health-check.log");
    let mut settings = settings_for(
        &format!("{}/health", server.uri()),
        Duration::from_secs(5),
        &log_file,
    );
    settings.accepted_status_codes = vec![200, 204];

    let result = app_health::run(&settings).await.expect("probe runs");

    assert!(result.is_up());
    assert_eq!(without_timestamp(&log_lines(&log_file)[0]), "Application is UP");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().expect("temp dir");
    let log_file = dir.path().join("health-check.log");
    let settings = settings_for(&server.uri(), Duration::from_millis(200), &log_file);

    let start = Instant::now();
    let result = app_health::run(&settings).await.expect("probe runs");

    assert!(start.elapsed() < Duration::from_secs(2), "probe took {:?}", start.elapsed());
    assert_eq!(result.status, HealthStatus::Down);
    assert!(matches!(result.detail, Some(Detail::Error(_))));
    let lines = log_lines(&log_file);
    assert_eq!(lines.len(), 1);
    assert!(without_timestamp(&lines[0]).starts_with("Application is DOWN. Error: "));
}

#[tokio::test]
async fn refused_connection_is_down_not_an_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr").port()
    };
    let dir = tempfile::tempdir().expect("temp dir");
    let log_file = dir.path().join("health-check.log");
    let settings = settings_for(
        &format!("http://127.0.0.1:{port}/"),
        Duration::from_secs(5),
        &log_file,
    );

    let result = app_health::run(&settings).await.expect("probe runs");

    assert_eq!(result.status, HealthStatus::Down);
    let line = &log_lines(&log_file)[0];
    let text = without_timestamp(line);
    assert!(text.starts_with("Application is DOWN. Error: "), "{text}");
    assert!(text.len() > "Application is DOWN. Error: ".len());
    assert!(!line.contains('\n'));
}

#[tokio::test]
async fn repeated_runs_append_in_order() {
    let server = server_returning(200).await;
    let dir = tempfile::tempdir().expect("temp dir");
    let log_file = dir.path().join("health-check.log");
    let settings = settings_for(
        &format!("{}/health", server.uri()),
        Duration::from_secs(5),
        &log_file,
    );

    let mut timestamps = Vec::new();
    for _ in 0..3 {
        let result = app_health::run(&settings).await.expect("probe runs");
        timestamps.push(result.timestamp);
    }

    let lines = log_lines(&log_file);
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(without_timestamp(line), "Application is UP");
    }
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
}
