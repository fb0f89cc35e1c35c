//! Command-line argument definitions for the Sprung CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input edge list, where coordinates are
//! written, configuration overrides, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Sprung layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input edge-list file
    #[arg(help = "Path to the input edge-list file")]
    pub input: String,

    /// Path to the output coordinates file, `-` for stdout
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of relaxation steps, overriding the configured budget
    #[arg(long)]
    pub steps: Option<usize>,

    /// Random seed for the initial placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
