// src/discover/mod.rs
// =============================================================================
// This module finds the documentation files to scan.
//
// Features:
// - Recursive walk starting from a root directory
// - Keeps only files whose name ends in ".md" (case-sensitive)
// - Stable order: siblings are visited sorted by file name
//
// Failure policy:
// - Any unreadable directory aborts the whole walk. The caller treats this as
//   fatal, unlike per-file extraction errors which are skipped.
// =============================================================================

mod walk;

// Re-export the main discovery function
pub use walk::find_markdown_files;
