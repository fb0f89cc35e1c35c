//! Sprung CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use sprung_cli::{Args, error_adapter::to_reportables};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Parse arguments before anything else so --log-level is known
    let args = Args::parse();

    // Initialize the logger; an unknown level is reported and replaced
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Sprung");
    debug!(args:?; "Parsed arguments");

    // Read, relax and write; failures become miette reports
    if let Err(err) = sprung_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // Render each error independently, one report per bad input line
        for reportable in to_reportables(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &reportable)
                .expect("Writing to String buffer is infallible");

            error!("{writer}");
        }

        // Exit code 1 marks a failed run
        process::exit(1);
    }

    info!("Completed successfully");
}
