#![allow(dead_code)]

use assert_cmd::Command;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

/// A scratch directory holding an HTML file and a checklist
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new(html: &str, checks: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("index.html"), html).expect("write html");
        fs::write(dir.path().join("checks.json"), checks).expect("write checks");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// The grader binary, running inside the fixture directory with no
    /// option coming from the environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("html-grader").expect("binary built");
        cmd.current_dir(self.dir.path())
            .env_remove("HTML_GRADER_CHECKS")
            .env_remove("HTML_GRADER_FILE")
            .env_remove("HTML_GRADER_URL")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// A router answering `GET /` with `status` and an HTML `body`
pub fn page(status: StatusCode, body: &'static str) -> Router {
    Router::new().route("/", get(move || async move { (status, Html(body)) }))
}

/// A router whose `GET /` only answers after `delay`
pub fn slow_page(delay: Duration) -> Router {
    Router::new().route(
        "/",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Html("<p>too late</p>")
        }),
    )
}

/// Serves `router` on a random local port from the current runtime
///
/// Returns the base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let url = format!("http://{}/", listener.local_addr().expect("addr"));

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    url
}

/// A server on its own runtime, for tests that drive the blocking binary
///
/// The server stops when this value is dropped.
pub struct BackgroundServer {
    pub url: String,
    _runtime: Runtime,
}

impl BackgroundServer {
    pub fn start(router: Router) -> Self {
        let runtime = Runtime::new().expect("build runtime");
        let url = runtime.block_on(spawn_server(router));
        Self {
            url,
            _runtime: runtime,
        }
    }
}
