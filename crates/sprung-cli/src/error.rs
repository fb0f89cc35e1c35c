//! Error type of the command-line driver.

use std::io;

use thiserror::Error;

use sprung::SprungError;

use crate::{config::ConfigError, input::InputError};

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The edge list is malformed; `src` keeps the text for span rendering.
    #[error("{err}")]
    Input { err: InputError, src: String },

    #[error(transparent)]
    Layout(#[from] SprungError),
}

impl CliError {
    /// Creates an input error that keeps its source text.
    pub fn new_input_error(err: InputError, src: impl Into<String>) -> Self {
        Self::Input {
            err,
            src: src.into(),
        }
    }
}
