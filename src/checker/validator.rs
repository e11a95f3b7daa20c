// src/checker/validator.rs
// =============================================================================
// This module decides whether a single link is valid.
//
// Classification:
// - "remote" if the target starts with http:// or https:// (case-sensitive)
// - "local" otherwise, checked against the filesystem
//
// A failed check is a LinkError. Its Display text is the human-readable reason
// that ends up in the report, so the wording here is user-facing.
// =============================================================================

use crate::checker::markdown::LinkReference;
use crate::checker::{http, local};
use crate::config::CheckerConfig;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Why a link failed validation
#[derive(Debug, Error)]
pub enum LinkError {
    /// The request never produced a response (DNS, connect, TLS, timeout, bad URL)
    #[error("request failed for {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered outside the 2xx range
    #[error("client error: {0}")]
    BadStatus(StatusCode),

    /// The local target could not be stat'ed.
    /// Permission errors land here too, not just "not found".
    #[error("file does not exist")]
    Missing(PathBuf),
}

/// Which way a link target gets checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Remote,
    Local,
}

impl LinkKind {
    pub fn of(url: &str) -> Self {
        if url.starts_with("http://") || url.starts_with("https://") {
            LinkKind::Remote
        } else {
            LinkKind::Local
        }
    }
}

/// Validates links one at a time, reusing a single HTTP client
pub struct LinkValidator {
    client: Client,
}

impl LinkValidator {
    // Builds the HTTP client once for the whole scan
    //
    // No custom redirect policy: the client's default applies, and nothing
    // is retried.
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Checks `link`, which was found in `source_file`.
    ///
    /// Relative local targets are resolved against the directory containing
    /// `source_file`, never the working directory.
    pub async fn validate(
        &self,
        link: &LinkReference,
        source_file: &Path,
    ) -> Result<(), LinkError> {
        let kind = LinkKind::of(&link.url);
        debug!(url = %link.url, line = link.line, ?kind, "validating link");

        match kind {
            LinkKind::Remote => http::check_remote(&self.client, &link.url).await,
            LinkKind::Local => local::check_local(link.target_path(), source_file),
        }
    }
}
