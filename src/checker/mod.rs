// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts [label](target) links from Markdown files
// - validator: Classifies a link and dispatches to the right check
// - http: Probes remote links with a HEAD request
// - local: Checks that local targets exist on disk
//
// This file (mod.rs) is the module root - it re-exports the public API so the
// rest of the application can write `checker::extract_links()` instead of
// `checker::markdown::extract_links()`.
// =============================================================================

mod http;
mod local;
mod markdown;
mod validator;

pub use markdown::{extract_links, LinkReference};
pub use validator::{LinkError, LinkValidator};
