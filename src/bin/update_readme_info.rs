//! update-readme-info - regenerate the README technology section
//!
//! Reads requirements.txt and rewrites the region between
//! `<!-- TECH_START -->` and `<!-- TECH_END -->` in README.md.

use clap::Parser;
use fitness_webapp::cli::ReadmeArgs;
use fitness_webapp::logging::init_tracing;
use fitness_webapp::output::{create_formatter, OutputConfig};
use fitness_webapp::updater::{ReadmeUpdater, UpdateOptions};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ReadmeArgs::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: ReadmeArgs) -> anyhow::Result<ExitCode> {
    tracing::debug!("update-readme-info v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Target: {}", args.path.display());
    if args.dry_run {
        tracing::debug!("Mode: dry-run");
    }

    let report = ReadmeUpdater::new(UpdateOptions::from(&args)).run()?;

    let output_config = OutputConfig::from_cli(
        args.json,
        args.diff,
        args.verbose,
        args.quiet,
        args.no_color,
    );
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
