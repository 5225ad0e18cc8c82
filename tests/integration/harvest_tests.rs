//! Integration tests for the harvester
//!
//! These tests use wiremock to serve a small radio directory over HTTP and
//! run the full harvest against it, writing to a temporary output file.

mod support;

use radio_harvest::crawler::{harvest, harvest_single, SkipCursor};
use radio_harvest::HarvestError;
use support::*;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_two_page_category_writes_only_stations_with_email() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_two_page_category(&server).await;

    let config = create_test_config(&server, &dir);
    let report = harvest(&config).await.expect("Harvest failed");

    let lines = read_lines(&config);
    assert_eq!(lines.len(), 2, "unexpected output: {:?}", lines);

    let s1: Vec<&str> = lines[0].split('~').collect();
    assert_eq!(s1[0], "S1");
    assert_eq!(s1[1], "s1@example.com");
    assert_eq!(s1[2], "North America");
    assert_eq!(s1[5], "555-0100");
    assert_eq!(s1[11], format!("{}/us/s1", server.uri()));
    assert!(lines[1].starts_with("S3~s3@example.com~"));

    assert_eq!(report.stats.listing_pages, 2);
    assert_eq!(report.stats.stations_visited, 3);
    assert_eq!(report.stats.stations_without_email, 1);
    assert_eq!(report.stats.records_written, 2);

    assert_eq!(
        requested_paths(&server).await,
        vec!["/", "/us", "/us/s1", "/us/s2", "/us/page/2", "/us/s3"]
    );
}

#[tokio::test]
async fn test_skip_to_starts_at_target_category() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount(&server, "/", landing(&["/a", "/b", "/c"])).await;
    mount(&server, "/a", listing(&["/a/1"], None)).await;
    mount(&server, "/b", listing(&["/b/1"], None)).await;
    mount(&server, "/c", listing(&["/c/1"], None)).await;
    mount(&server, "/a/1", station("A1", Some("a1@example.com"))).await;
    mount(&server, "/b/1", station("B1", Some("b1@example.com"))).await;
    mount(&server, "/c/1", station("C1", Some("c1@example.com"))).await;

    let mut config = create_test_config(&server, &dir);
    config.site.skip_to = Some(format!("{}/b", server.uri()));

    let report = harvest(&config).await.expect("Harvest failed");

    let lines = read_lines(&config);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("B1~"));
    assert!(lines[1].starts_with("C1~"));

    let paths = requested_paths(&server).await;
    assert!(!paths.iter().any(|p| p.starts_with("/a")));
    assert_eq!(report.cursor, SkipCursor::Cleared);
    assert_eq!(report.stats.categories_skipped, 1);
}

#[tokio::test]
async fn test_second_run_appends_duplicates() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount(&server, "/", landing(&["/us"])).await;
    mount(&server, "/us", listing(&["/us/s1"], None)).await;
    mount(&server, "/us/s1", station("S1", Some("s1@example.com"))).await;

    let config = create_test_config(&server, &dir);
    harvest(&config).await.expect("First harvest failed");
    harvest(&config).await.expect("Second harvest failed");

    let lines = read_lines(&config);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
}

#[tokio::test]
async fn test_navigation_failure_is_fatal_and_keeps_earlier_records() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount(&server, "/", landing(&["/us", "/ca"])).await;
    mount(&server, "/us", listing(&["/us/s1", "/us/gone", "/us/s3"], None)).await;
    mount(&server, "/us/s1", station("S1", Some("s1@example.com"))).await;
    mount(&server, "/us/s3", station("S3", Some("s3@example.com"))).await;

    let config = create_test_config(&server, &dir);
    let err = harvest(&config).await.unwrap_err();

    assert!(matches!(err, HarvestError::Status { status: 404, .. }));

    let lines = read_lines(&config);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("S1~"));

    let paths = requested_paths(&server).await;
    assert!(!paths.contains(&"/us/s3".to_string()));
    assert!(!paths.contains(&"/ca".to_string()));
}

#[tokio::test]
async fn test_non_html_response_is_fatal() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"{}".to_vec(), "application/json"))
        .mount(&server)
        .await;

    let config = create_test_config(&server, &dir);
    let err = harvest(&config).await.unwrap_err();
    assert!(matches!(err, HarvestError::ContentMismatch { .. }));
}

#[tokio::test]
async fn test_single_station_mode() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount(&server, "/us/s1", station("S1", Some("s1@example.com"))).await;
    mount(&server, "/us/s2", station("S2", None)).await;

    let config = create_test_config(&server, &dir);

    let with_email = Url::parse(&format!("{}/us/s1", server.uri())).unwrap();
    assert!(harvest_single(&config, &with_email).await.unwrap());

    let without_email = Url::parse(&format!("{}/us/s2", server.uri())).unwrap();
    assert!(!harvest_single(&config, &without_email).await.unwrap());

    let lines = read_lines(&config);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("S1~s1@example.com~"));
}
