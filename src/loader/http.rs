// src/loader/http.rs
// =============================================================================
// Fetches an HTML document over HTTP(S).
//
// One GET, no retries. Unlike a bare "wait for success" fetch, every way the
// request can go wrong ends in an error value:
// - the request takes longer than the configured timeout
// - the connection cannot be made (DNS, refused, TLS)
// - the server answers with a non-2xx status
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::{GraderError, Result};

/// Downloads the body of `url` as text
pub async fn fetch_html(url: &Url, timeout: Duration) -> Result<String> {
    // Follow up to 10 redirects, like a browser would
    let client = Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| categorize_error(url, timeout, e))?;

    info!(%url, "fetching document");

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| categorize_error(url, timeout, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GraderError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // text() honours the charset in Content-Type and falls back to UTF-8
    let body = response
        .text()
        .await
        .map_err(|e| categorize_error(url, timeout, e))?;

    debug!(%url, status = status.as_u16(), bytes = body.len(), "fetched document");
    Ok(body)
}

// Timeouts get their own variant so the message can say how long we waited;
// everything else keeps reqwest's own description.
fn categorize_error(url: &Url, timeout: Duration, error: reqwest::Error) -> GraderError {
    if error.is_timeout() {
        GraderError::Timeout {
            url: url.to_string(),
            timeout,
        }
    } else {
        GraderError::Fetch {
            url: url.to_string(),
            source: error,
        }
    }
}
