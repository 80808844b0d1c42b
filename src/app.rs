// Declare modules
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod formatter;
pub mod models;
pub mod policy;
pub mod scanner;
pub mod sniffer;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::scanner::Scanner;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let mut args = Cli::parse();
    init_logging(args.verbose);

    // 2. No root given: show usage and do nothing
    let Some(root) = args.path.take() else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    // 3. Resolve Configuration
    let verbose = args.verbose;
    let config = resolve_config(args, root)?;
    log::debug!(
        "Scanning {} in {:?} mode",
        config.root.display(),
        config.policy.mode
    );

    // 4. Scan Directory
    let root_display = config.root.display().to_string();
    let result = Scanner::new(config)
        .scan()
        .with_context(|| format!("Failed to scan {}", root_display))?;

    // 5. Print to Stdout
    println!("{}", OutputGenerator::format_total(&result));
    if verbose {
        println!("{}", OutputGenerator::format_breakdown(&result));
    }

    Ok(())
}
