// src/core/net.rs

// Single blocking GET. The whole body is buffered before anyone parses it.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::FeedError;

/// No retries. `timeout` is handed to the client as-is; `None` disables it.
pub fn http_get(url: &str, timeout: Option<Duration>) -> Result<String, FeedError> {
    let fetch_err = |source: reqwest::Error| FeedError::Fetch { url: s!(url), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;

    logf!("GET {url}");
    let resp = client.get(url).send().map_err(fetch_err)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FeedError::Status { url: s!(url), status: status.as_u16() });
    }
    let body = resp.text().map_err(fetch_err)?;
    logd!("Fetched {} bytes", body.len());
    Ok(body)
}
