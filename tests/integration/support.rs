//! Shared fixtures for the integration tests
//!
//! A tiny radio directory served by wiremock: landing page, listing pages
//! and station pages, all as `text/html`.

#![allow(dead_code)]

use radio_harvest::config::Config;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(format!("<html><body>{body}</body></html>"), "text/html")
}

pub fn landing(categories: &[&str]) -> ResponseTemplate {
    let items: String = categories
        .iter()
        .map(|c| format!(r#"<li><a href="{c}">{c}</a></li>"#))
        .collect();
    html(format!(
        r#"<ul class="countries__countries-list">{items}<li>Coming soon</li></ul>"#
    ))
}

pub fn listing(stations: &[&str], next: Option<&str>) -> ResponseTemplate {
    let items: String = stations
        .iter()
        .map(|s| format!(r#"<li><figure><a href="{s}">station</a></figure></li>"#))
        .collect();
    let last = match next {
        Some(href) => format!(r#"<dd><a href="{href}">&raquo;</a></dd>"#),
        None => "<dd><span>&raquo;</span></dd>".to_string(),
    };
    html(format!(
        r#"<ul class="stations-list">{items}</ul>
           <dl class="pagination"><dd><a href="/">1</a></dd>{last}</dl>"#
    ))
}

pub fn station(name: &str, email: Option<&str>) -> ResponseTemplate {
    let email = email
        .map(|e| format!(r#"<p itemprop="email"><a href="mailto:{e}">{e}</a></p>"#))
        .unwrap_or_default();
    html(format!(
        r#"<ul class="breadcrumbs">
               <li><a href="/"><span>North America</span></a></li>
               <li><span>{name}</span></li>
           </ul>
           <h1 itemprop="name">{name}</h1>
           <p itemprop="telephone">Phone: 555-0100</p>
           {email}"#
    ))
}

pub async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Creates a test configuration pointing at the mock server
pub fn create_test_config(server: &MockServer, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.site.landing_url = format!("{}/", server.uri());
    config.output.records_path = dir.path().join("output.txt").display().to_string();
    config.output.log_path = dir.path().join("output.log").display().to_string();
    config
}

pub fn read_lines(config: &Config) -> Vec<String> {
    std::fs::read_to_string(&config.output.records_path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

pub async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}

/// Mounts the two-page `/us` category: S1 and S3 list an email, S2 does not
pub async fn mount_two_page_category(server: &MockServer) {
    mount(server, "/", landing(&["/us"])).await;
    mount(server, "/us", listing(&["/us/s1", "/us/s2"], Some("/us/page/2"))).await;
    mount(server, "/us/page/2", listing(&["/us/s3"], None)).await;
    mount(server, "/us/s1", station("S1", Some("s1@example.com"))).await;
    mount(server, "/us/s2", station("S2", None)).await;
    mount(server, "/us/s3", station("S3", Some("s3@example.com"))).await;
}
