// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool has no subcommands: a single scan is run over one directory.
// Everything the user can configure lives on the `Cli` struct below.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate parsing code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "md-link-check",
    version,
    about = "Scan a directory of Markdown files for broken links",
    long_about = "md-link-check walks a directory, extracts every [label](target) link from \
                  its Markdown files and checks that local targets exist and remote URLs \
                  answer with a 2xx status."
)]
pub struct Cli {
    /// The directory to scan for markdown files
    #[arg(long, default_value = ".")]
    pub directory: PathBuf,

    /// Output the report in JSON format instead of text
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 when any broken link is found
    ///
    /// Without this flag, broken links are reported but the exit code stays 0,
    /// so only a failed directory walk makes the run fail.
    #[arg(long)]
    pub fail_on_broken: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why PathBuf instead of String for --directory?
//    - PathBuf is the owned path type; it handles non-UTF-8 paths
//    - clap parses it directly, no conversion needed later
//
// 2. Why `version` with no value?
//    - clap fills it in from Cargo.toml, so it never drifts
// -----------------------------------------------------------------------------
