// src/discover/walk.rs
// =============================================================================
// This module implements the recursive walk for Markdown files.
//
// How it works:
// 1. Walk the root with `walkdir`, siblings sorted by name
// 2. Skip directory entries (they are traversed, never returned)
// 3. Keep every other entry whose file name ends in ".md"
// 4. Stop at the first error and report it with the root path
//
// Symlinks are not followed, but a symlink named "*.md" is still returned;
// the validator only ever needs a path it can open.
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// The suffix that marks a documentation file
pub const MARKDOWN_SUFFIX: &str = ".md";

// Recursively finds all markdown files under `root`
//
// Parameters:
//   root: directory to scan (a single file is also accepted)
//
// Returns: the matching paths in traversal order, or the first walk error
//
// Example:
//   docs/README.md, docs/guide/intro.md, docs/notes.txt
//   -> [docs/README.md, docs/guide/intro.md]
pub fn find_markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("error walking directory {}", root.display()))?;

        if entry.file_type().is_dir() {
            continue;
        }

        if is_markdown(&entry) {
            debug!(path = %entry.path().display(), "found markdown file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

// Checks the file name, not Path::extension(), so a file literally named
// ".md" still counts
fn is_markdown(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .ends_with(MARKDOWN_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Builds the same small tree most tests use:
    //   test1.md, test2.txt, subdir/test3.md, subdir/local.txt
    fn create_test_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test1.md"), "[link1](http://example.com)").unwrap();
        fs::write(dir.path().join("test2.txt"), "not a markdown file").unwrap();
        let sub = dir.path().join("subdir");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("test3.md"), "[link2](./local.txt)").unwrap();
        fs::write(sub.join("local.txt"), "I exist").unwrap();
        dir
    }

    #[test]
    fn test_finds_markdown_recursively() {
        let dir = create_test_dir();
        let files = find_markdown_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("subdir").join("test3.md"),
                dir.path().join("test1.md"),
            ]
        );
    }

    #[test]
    fn test_skips_directories_with_md_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("notes.md")).unwrap();
        fs::write(dir.path().join("notes.md").join("inner.md"), "").unwrap();

        let files = find_markdown_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("notes.md").join("inner.md")]);
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UPPER.MD"), "").unwrap();
        fs::write(dir.path().join("mixed.Md"), "").unwrap();
        fs::write(dir.path().join("lower.md"), "").unwrap();

        let files = find_markdown_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("lower.md")]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_markdown_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = find_markdown_files(&missing).unwrap_err();
        assert!(err.to_string().contains("error walking directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_aborts_walk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = create_test_dir();
        let locked = dir.path().join("subdir");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores the mode bits, nothing to check then
        let blocked = fs::read_dir(&locked).is_err();
        let result = find_markdown_files(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if blocked {
            let err = result.unwrap_err();
            assert!(err.to_string().contains("error walking directory"));
        }
    }

    #[test]
    fn test_order_is_stable() {
        let dir = create_test_dir();
        let first = find_markdown_files(dir.path()).unwrap();
        let second = find_markdown_files(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
