// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging to stderr
// 3. Scan the directory and validate every link, one at a time
// 4. Print the report
// 5. Exit with the proper code:
//      0 = scan completed (broken links are reported, not fatal)
//      1 = broken links found and --fail-on-broken was given
//      2 = fatal error (directory walk failed, HTTP client unavailable)
// =============================================================================

mod checker; // src/checker/ - link extraction and validation
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - runtime settings
mod discover; // src/discover/ - finding Markdown files
mod report; // src/report.rs - running a scan and printing the results

use anyhow::Result;
use checker::LinkValidator;
use clap::Parser;
use cli::Cli;
use config::{Config, OutputFormat};
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute creates a tokio runtime for the HTTP client.
// Nothing runs concurrently: every request is awaited before the next one.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(Config::from(&cli)).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(config: Config) -> Result<i32> {
    let validator = LinkValidator::new(&config.checker)?;

    if config.format == OutputFormat::Text {
        println!("Scanning for broken links in {}...\n", config.root.display());
    }

    let report = report::scan(&config.root, &validator).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => report::write_text(&report, &mut out)?,
        OutputFormat::Json => report::write_json(&report, &mut out)?,
    }

    Ok(config.exit_code(report.broken_count()))
}
