// src/checker/local.rs
// =============================================================================
// This module checks links that point at files on disk.
//
// Rules:
// - Absolute targets are checked as-is
// - Relative targets are joined onto the directory of the Markdown file that
//   contains the link, then "." and ".." are folded away lexically
// - The target only has to exist: a directory is as good as a file
// - Any failure to stat the target (not found, permission denied, ...) is
//   reported the same way, as a missing file
// =============================================================================

use crate::checker::validator::LinkError;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub fn check_local(target: impl AsRef<Path>, source_file: &Path) -> Result<(), LinkError> {
    let path = resolve(target, source_file);

    match fs::metadata(&path) {
        Ok(_) => Ok(()),
        Err(_) => Err(LinkError::Missing(path)),
    }
}

// Turns a link target into the path we stat
//
// Example:
//   target = "../guide/intro.md", source_file = "docs/api/index.md"
//   -> "docs/guide/intro.md"
pub fn resolve(target: impl AsRef<Path>, source_file: &Path) -> PathBuf {
    let target = target.as_ref();
    if target.is_absolute() {
        return target.to_path_buf();
    }

    let base_dir = source_file.parent().unwrap_or(Path::new(""));
    normalize(&base_dir.join(target))
}

// Lexical cleanup, no filesystem access: "a/./b/../c" -> "a/c"
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // ".." at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
