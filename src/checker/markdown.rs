// src/checker/markdown.rs
// =============================================================================
// This module extracts links from Markdown files.
//
// Links are found lexically, one physical line at a time, with the pattern
//     \[.*?\]\((.*?)\)
// Both spans are lazy, so the target ends at the first ")" and the label ends
// at the first "](" that lets the whole pattern match. There is no
// bracket-aware parsing: "[x](a(b)c)" yields the target "a(b". Links that span
// lines, reference-style links and autolinks are not recognised.
//
// Rust concepts:
// - BufRead: Reading a file in chunks instead of all at once
// - LazyLock: Compiling the regex once, on first use
// =============================================================================

use anyhow::{Context, Result};
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Matched on raw bytes with Unicode off, so "." accepts any byte but '\n'.
// The pattern is a constant and known to be valid, so a failure here is a
// programmer error
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\[.*?\]\((.*?)\)").expect("link pattern is valid"));

/// A link found in a Markdown file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkReference {
    /// The target text between the parentheses
    pub url: String,
    /// 1-indexed line the link was found on
    pub line: usize,
    /// Original target bytes, kept only when they are not valid UTF-8
    #[serde(skip)]
    raw: Option<Vec<u8>>,
}

impl LinkReference {
    pub fn new(url: impl Into<String>, line: usize) -> Self {
        Self {
            url: url.into(),
            line,
            raw: None,
        }
    }

    fn from_bytes(target: &[u8], line: usize) -> Self {
        match std::str::from_utf8(target) {
            Ok(url) => Self::new(url, line),
            Err(_) => Self {
                url: String::from_utf8_lossy(target).into_owned(),
                line,
                raw: Some(target.to_vec()),
            },
        }
    }

    /// The target as a filesystem path.
    ///
    /// On Unix a target that is not valid UTF-8 keeps its original bytes, so
    /// `caf\xe9.txt` names the file on disk rather than `caf\u{fffd}.txt`.
    pub fn target_path(&self) -> PathBuf {
        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            if let Some(raw) = &self.raw {
                return PathBuf::from(OsStr::from_bytes(raw));
            }
        }
        PathBuf::from(&self.url)
    }
}

// Extracts all links from the file at `path`
//
// Returns an error if the file cannot be opened or a read fails part way;
// in both cases no links are returned for the file.
pub fn extract_links(path: &Path) -> Result<Vec<LinkReference>> {
    let file =
        File::open(path).with_context(|| format!("could not open file {}", path.display()))?;

    extract_links_from_reader(BufReader::new(file))
        .with_context(|| format!("error scanning file {}", path.display()))
}

// Extracts links from any buffered reader, line by line
//
// Lines are split on '\n' with a trailing '\r' removed. Lines that are not
// valid UTF-8 are matched as bytes rather than failing the whole file.
pub fn extract_links_from_reader<R: BufRead>(reader: R) -> Result<Vec<LinkReference>> {
    let mut links = Vec::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        links.extend(extract_from_line(&line, index + 1));
    }

    Ok(links)
}

// Finds every link on a single line, left to right
fn extract_from_line(text: &[u8], line: usize) -> impl Iterator<Item = LinkReference> + '_ {
    LINK_PATTERN
        .captures_iter(text)
        .map(move |caps| LinkReference::from_bytes(&caps[1], line))
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why split(b'\n') instead of lines()?
//    - lines() fails on the first invalid UTF-8 byte
//    - split() hands us raw bytes, and the bytes regex never fails on them
//
// 2. What does caps[1] mean?
//    - Index 0 is the whole match, index 1 the first capture group (the target)
//    - The group always participates in a match, so indexing cannot panic
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn extract(text: &str) -> Vec<LinkReference> {
        extract_links_from_reader(Cursor::new(text)).unwrap()
    }

    fn link(url: &str, line: usize) -> LinkReference {
        LinkReference::new(url, line)
    }

    #[test]
    fn test_extract_links_with_line_numbers() {
        let links = extract(
            "This is a [good link](https://good.com).\nThis is a [broken link](./bad.md).",
        );
        assert_eq!(links, vec![link("https://good.com", 1), link("./bad.md", 2)]);
    }

    #[test]
    fn test_multiple_links_on_one_line_keep_order() {
        let links = extract("[a](one) and [b](two), then [c](three)");
        assert_eq!(links, vec![link("one", 1), link("two", 1), link("three", 1)]);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let links = extract("\n\n# Title\n\n[x](target.md)\n");
        assert_eq!(links, vec![link("target.md", 5)]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let links = extract("[a](first)\r\n[b](second)\r\n");
        assert_eq!(links, vec![link("first", 1), link("second", 2)]);
    }

    #[test]
    fn test_target_stops_at_first_closing_paren() {
        let links = extract("[x](a(b)c)");
        assert_eq!(links, vec![link("a(b", 1)]);
    }

    #[test]
    fn test_label_runs_to_first_bracket_paren() {
        let links = extract("[a]b](c)");
        assert_eq!(links, vec![link("c", 1)]);
    }

    #[test]
    fn test_empty_target_is_captured() {
        assert_eq!(extract("[empty]()"), vec![link("", 1)]);
    }

    #[test]
    fn test_links_do_not_span_lines() {
        assert!(extract("[label\n](target)").is_empty());
        assert!(extract("[label](tar\nget)").is_empty());
    }

    #[test]
    fn test_non_links_are_ignored() {
        assert!(extract("plain text, [brackets] and (parens) apart").is_empty());
    }

    #[test]
    fn test_invalid_utf8_outside_link_is_ignored() {
        let bytes: &[u8] = b"\xff\xfe [ok](fine.md)\n";
        let links = extract_links_from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(links, vec![link("fine.md", 1)]);
        assert_eq!(links[0].target_path(), PathBuf::from("fine.md"));
    }

    #[test]
    fn test_invalid_utf8_target_keeps_raw_bytes() {
        let bytes: &[u8] = b"see [x](caf\xe9.txt) here\n";
        let links = extract_links_from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "caf\u{fffd}.txt");
        assert_eq!(links[0].line, 1);

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;
            assert_eq!(
                links[0].target_path(),
                PathBuf::from(OsStr::from_bytes(b"caf\xe9.txt"))
            );
        }
    }

    #[test]
    fn test_multibyte_utf8_target() {
        let links = extract("[menu](café/日本.md)");
        assert_eq!(links, vec![link("café/日本.md", 1)]);
    }

    #[test]
    fn test_extract_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "[a](http://x/good)\n[b](./missing.txt)\n").unwrap();

        let links = extract_links(&path).unwrap();
        assert_eq!(links, vec![link("http://x/good", 1), link("./missing.txt", 2)]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_links(&dir.path().join("nope.md")).unwrap_err();
        assert!(err.to_string().contains("could not open file"));
    }
}
