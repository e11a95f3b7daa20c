// src/checker/http.rs
// =============================================================================
// This module checks if remote URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes a single HTTP HEAD request (lightweight, no body download)
// - 2xx means the link is fine; anything else is broken
// - Transport failures (DNS, connect, TLS, timeout) are broken too
//
// Checks run one at a time: the caller awaits each probe before starting the
// next, so a slow host holds up the scan for up to the client timeout.
//
// Rust concepts:
// - async/await: The HTTP client is async even though we use it sequentially
// - Result<T, E>: The error value carries the reason the link is broken
// =============================================================================

use crate::checker::validator::LinkError;
use reqwest::Client;
use tracing::debug;

// Checks a single remote link
//
// Parameters:
//   client: the shared reqwest client (timeout and user agent already set)
//   url: the link target, starting with http:// or https://
//
// Returns: Ok(()) for a 2xx response, otherwise the reason it failed
pub async fn check_remote(client: &Client, url: &str) -> Result<(), LinkError> {
    let response = client
        .head(url)
        .send()
        .await
        .map_err(|source| LinkError::RequestFailed {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    debug!(%url, status = status.as_u16(), "remote link answered");

    // 200-299 only; redirects the client did not follow count as broken
    if status.is_success() {
        Ok(())
    } else {
        Err(LinkError::BadStatus(status))
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why HEAD and not GET?
//    - HEAD asks for the headers only, so no body is downloaded
//    - Some servers reject HEAD; those links show up as broken
//
// 2. What does map_err do?
//    - Converts the reqwest::Error into our own LinkError
//    - The ? operator then returns early with it
// -----------------------------------------------------------------------------
