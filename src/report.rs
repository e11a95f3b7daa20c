// src/report.rs
// =============================================================================
// This module runs a scan and turns the results into a report.
//
// How a scan works:
// 1. Find every Markdown file under the root (a failure here is fatal)
// 2. Extract the links of each file (a failure here skips just that file)
// 3. Validate each link, strictly one after another, in extraction order
// 4. Record every broken link with its file, line and reason
//
// The report can be printed as text (the default) or as JSON.
// =============================================================================

use crate::checker::{self, LinkError, LinkReference, LinkValidator};
use crate::discover;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RULE: &str = "--------------------------------------------------";

/// A link that failed validation, with where it was found and why it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    pub file: PathBuf,
    #[serde(flatten)]
    pub link: LinkReference,
    pub reason: String,
}

/// The outcome of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub links_checked: usize,
    /// Files whose links could not be extracted (reported on stderr, then skipped)
    pub extraction_failures: usize,
    pub broken: Vec<BrokenLink>,
}

impl Report {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            files_scanned: 0,
            links_checked: 0,
            extraction_failures: 0,
            broken: Vec::new(),
        }
    }

    pub fn broken_count(&self) -> usize {
        self.broken.len()
    }
}

// Scans `root` and validates every link found
//
// Returns Err only when the directory walk itself fails. Per-file extraction
// errors are printed to stderr and counted; broken links go into the report.
pub async fn scan(root: &Path, validator: &LinkValidator) -> Result<Report> {
    let files = discover::find_markdown_files(root)?;
    debug!(count = files.len(), "markdown files discovered");

    let mut report = Report::new(root);

    for file in &files {
        report.files_scanned += 1;

        let links = match checker::extract_links(file) {
            Ok(links) => links,
            Err(e) => {
                eprintln!("Could not extract links from {}: {:#}", file.display(), e);
                warn!(file = %file.display(), "skipping file after extraction failure");
                report.extraction_failures += 1;
                continue;
            }
        };
        debug!(file = %file.display(), links = links.len(), "links extracted");

        for link in links {
            report.links_checked += 1;

            if let Err(err) = validator.validate(&link, file).await {
                if let LinkError::Missing(resolved) = &err {
                    debug!(resolved = %resolved.display(), "local target missing");
                }
                report.broken.push(BrokenLink {
                    file: file.clone(),
                    link,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

// Writes the human-readable report
//
// Example:
//   Found 1 broken links:
//   --------------------------------------------------
//   File: docs/index.md (Line: 2)
//   Link: ./missing.txt
//   Reason: file does not exist
//
//   --------------------------------------------------
//   Checked 2 link(s) in 1 file(s)
//   Scan complete.
pub fn write_text<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
    if report.files_scanned == 0 {
        writeln!(out, "No markdown files found.")?;
        return Ok(());
    }

    if report.broken.is_empty() {
        writeln!(out, "No broken links found. Great work!")?;
    } else {
        writeln!(out, "Found {} broken links:", report.broken_count())?;
        writeln!(out, "{}", RULE)?;
        for broken in &report.broken {
            writeln!(
                out,
                "File: {} (Line: {})",
                broken.file.display(),
                broken.link.line
            )?;
            writeln!(out, "Link: {}", broken.link.url)?;
            writeln!(out, "Reason: {}", broken.reason)?;
            writeln!(out)?;
        }
        writeln!(out, "{}", RULE)?;
    }

    writeln!(
        out,
        "Checked {} link(s) in {} file(s)",
        report.links_checked, report.files_scanned
    )?;
    if report.extraction_failures > 0 {
        writeln!(
            out,
            "Skipped {} file(s) that could not be read",
            report.extraction_failures
        )?;
    }
    writeln!(out, "Scan complete.")
}

// Writes the whole report as pretty-printed JSON
pub fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
