//! Log file tests
//!
//! Installs the global subscriber, so these live in their own test binary.

mod support;

use radio_harvest::crawler::{harvest, harvest_single};
use radio_harvest::logging;
use support::*;
use tempfile::TempDir;
use url::Url;
use wiremock::MockServer;

#[tokio::test]
async fn test_log_file_mirrors_harvest_notices() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_two_page_category(&server).await;
    mount(&server, "/us/s4", station("S4", None)).await;

    let config = create_test_config(&server, &dir);
    let log_path = dir.path().join("output.log");
    logging::init(&log_path, 0, false).expect("Failed to open log file");

    harvest(&config).await.expect("Harvest failed");

    let s4 = Url::parse(&format!("{}/us/s4", server.uri())).unwrap();
    assert!(!harvest_single(&config, &s4).await.expect("Single scrape failed"));

    let log = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();

    assert!(lines.iter().any(|l| l.contains("📻 Starting!")));
    assert!(lines
        .iter()
        .any(|l| l.contains(&format!("📻 Fetching first page of {}/us", server.uri()))));
    assert!(lines
        .iter()
        .any(|l| l.contains(&format!("📻 Fetching next page: {}/us/page/2", server.uri()))));

    // Each no-email notice appears exactly once
    for station in ["s2", "s4"] {
        let notice = format!("{}/us/{} has no email address listed", server.uri(), station);
        assert_eq!(
            lines.iter().filter(|l| l.contains(&notice)).count(),
            1,
            "expected one notice for {station} in:\n{log}"
        );
    }

    let written: Vec<String> = lines
        .iter()
        .filter_map(|l| l.split_once("✅ ").map(|(_, record)| record.to_string()))
        .collect();
    assert_eq!(written.len(), 2);
    assert!(written[0].starts_with("S1~s1@example.com~"));
    assert!(written[1].starts_with("S3~s3@example.com~"));
    assert_eq!(written, read_lines(&config));

    for line in &lines {
        let stamp = line
            .strip_prefix('[')
            .and_then(|rest| rest.split_once(']'))
            .map(|(stamp, _)| stamp)
            .unwrap_or_else(|| panic!("line without timestamp: {line}"));

        assert!(stamp.ends_with('Z'), "not UTC: {stamp}");
        assert!(
            chrono::DateTime::parse_from_rfc3339(stamp).is_ok(),
            "not RFC 3339: {stamp}"
        );
    }
}
