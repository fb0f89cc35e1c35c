//! CLI logic for the Sprung layout tool.
//!
//! Reads an edge list, relaxes a layout for it and writes the resulting
//! coordinates.

pub mod error_adapter;
pub mod input;

mod args;
mod config;
mod error;
mod output;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::{
    fs::{self, File},
    io::{self, BufWriter},
};

use log::info;

use sprung::Simulation;

/// Run the Sprung CLI application
///
/// This function reads the input edge list, relaxes a layout for it and
/// writes the node coordinates to the output path or stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Edge-list syntax errors
/// - Invalid engine parameters
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(steps) = args.steps {
        app_config = app_config.with_max_steps(steps);
    }
    if let Some(seed) = args.seed {
        app_config = app_config.with_seed(seed);
    }

    let source = fs::read_to_string(&args.input)?;
    let graph = input::parse_edge_list(&source)
        .map_err(|err| CliError::new_input_error(err, source.as_str()))?;

    let mut simulation = Simulation::new(graph, &app_config)?;
    simulation.run();

    if args.output == "-" {
        output::write_coordinates(&mut io::stdout().lock(), &simulation)?;
    } else {
        let file = File::create(&args.output)?;
        output::write_coordinates(&mut BufWriter::new(file), &simulation)?;
        info!(output_file = args.output; "Coordinates exported successfully");
    }

    Ok(())
}
