//! Error types for Sprung operations.
//!
//! This module provides the main error type [`SprungError`] covering the few
//! ways the layout engine can reject its input. Once a [`crate::Layout`]
//! exists, every engine operation on it is total.

use thiserror::Error;

use sprung_core::graph::GraphError;

/// The main error type for Sprung operations.
#[derive(Debug, Error)]
pub enum SprungError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Layout error: expected {expected} positions, got {actual}")]
    PositionCount { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}
