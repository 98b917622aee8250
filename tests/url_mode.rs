mod common;

use axum::http::StatusCode;
use common::{page, slow_page, spawn_server, Fixture};
use html_grader::{check_url, GraderError};
use std::time::Duration;
use url::Url;

#[tokio::test]
async fn check_url_grades_remote_document() {
    let fx = Fixture::new("", r#"["a[href]", "footer", "h1"]"#);
    let url = spawn_server(page(StatusCode::OK, r#"<h1>Hi</h1><a href="/x">x</a>"#)).await;

    let url = Url::parse(&url).unwrap();
    let results = check_url(&url, &fx.path("checks.json"), Duration::from_secs(5))
        .await
        .unwrap();

    let entries: Vec<_> = results.iter().collect();
    assert_eq!(entries, vec![("a[href]", true), ("footer", false), ("h1", true)]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let fx = Fixture::new("", r#"["h1"]"#);
    let url = spawn_server(page(StatusCode::INTERNAL_SERVER_ERROR, "oops")).await;

    let url = Url::parse(&url).unwrap();
    let err = check_url(&url, &fx.path("checks.json"), Duration::from_secs(5))
        .await
        .unwrap_err();

    assert!(matches!(err, GraderError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let fx = Fixture::new("", r#"["h1"]"#);
    let url = spawn_server(slow_page(Duration::from_secs(3))).await;

    let url = Url::parse(&url).unwrap();
    let err = check_url(&url, &fx.path("checks.json"), Duration::from_secs(1))
        .await
        .unwrap_err();

    assert!(matches!(err, GraderError::Timeout { .. }));
    assert!(err.to_string().contains("timed out after 1s"));
}

#[tokio::test]
async fn broken_checklist_fails_before_fetching() {
    let fx = Fixture::new("", "not json");
    // Nothing listens here; a fetch would fail with a different error
    let url = Url::parse("http://127.0.0.1:9/").unwrap();

    let err = check_url(&url, &fx.path("checks.json"), Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(matches!(err, GraderError::ChecklistParse { .. }));
}
