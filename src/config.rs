// src/config.rs
// =============================================================================
// Runtime configuration, derived from the parsed command line.
//
// There is no config file and no environment variables: `Cli` is the only
// source. This module turns it into the settings the scan actually needs and
// holds the fixed validator settings (timeout and user agent).
// =============================================================================

use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;

/// Timeout for a single remote HEAD probe.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent with every remote probe.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// How the final report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings for the link validator's HTTP client
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub fail_on_broken: bool,
    pub checker: CheckerConfig,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            root: cli.directory.clone(),
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            fail_on_broken: cli.fail_on_broken,
            checker: CheckerConfig::default(),
        }
    }
}

impl Config {
    /// Exit code for a scan that completed and found `broken_count` broken links
    pub fn exit_code(&self, broken_count: usize) -> i32 {
        if self.fail_on_broken && broken_count > 0 {
            1
        } else {
            0
        }
    }
}
