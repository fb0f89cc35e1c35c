//! Configuration types for the Sprung layout engine.
//!
//! This module provides configuration structures that tune the force model,
//! the step-size search, the initial placement and the driver loop. All types
//! implement [`serde::Deserialize`] so they can be loaded from external
//! sources; every field has a default, so an empty document is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`ForceConfig`] - Target edge length of the force model.
//! - [`SearchConfig`] - Bracket and bisection parameters of the step search.
//! - [`PlacementConfig`] - Jitter range applied to seeded placements.
//! - [`SimulationConfig`] - Step budget and random seed of the driver.
//!
//! # Example
//!
//! ```
//! # use sprung::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.force().edge_length(), 10.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use crate::{
    error::SprungError,
    force::{DEFAULT_EDGE_LENGTH, ForceModel},
    search::StepSearch,
};

/// Top-level configuration combining every section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Force model section.
    #[serde(default)]
    force: ForceConfig,

    /// Step-size search section.
    #[serde(default)]
    search: SearchConfig,

    /// Initial placement section.
    #[serde(default)]
    placement: PlacementConfig,

    /// Driver loop section.
    #[serde(default)]
    simulation: SimulationConfig,
}

impl AppConfig {
    /// Returns the force model configuration.
    pub fn force(&self) -> &ForceConfig {
        &self.force
    }

    /// Returns the step-size search configuration.
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Returns the placement configuration.
    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }

    /// Returns the driver loop configuration.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Overrides the driver step budget.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.simulation.max_steps = max_steps;
        self
    }

    /// Overrides the random seed used for placements.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.simulation.seed = Some(seed);
        self
    }

    /// Checks every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), SprungError> {
        ForceModel::from_config(&self.force)?;
        StepSearch::from_config(&self.search)?;
        self.placement.validate()
    }
}

/// Force model configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    /// Resting distance between adjacent nodes.
    edge_length: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE_LENGTH,
        }
    }
}

impl ForceConfig {
    /// Returns the configured edge length.
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }
}

/// Step-size search configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// First displacement scale tried by the bracket phase.
    initial_scale: f64,

    /// Maximum number of doubling rounds in the bracket phase.
    bracket_steps: usize,

    /// Number of halving rounds in the bisection phase.
    bisection_steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            bracket_steps: 4,
            bisection_steps: 4,
        }
    }
}

impl SearchConfig {
    /// Returns the first displacement scale of the bracket phase.
    pub fn initial_scale(&self) -> f64 {
        self.initial_scale
    }

    /// Returns the maximum number of bracket rounds.
    pub fn bracket_steps(&self) -> usize {
        self.bracket_steps
    }

    /// Returns the number of bisection rounds.
    pub fn bisection_steps(&self) -> usize {
        self.bisection_steps
    }
}

/// Placement configuration.
///
/// Seeded placements scale each coordinate by a factor drawn uniformly from
/// `jitter_min..=jitter_max`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    jitter_min: f64,
    jitter_max: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            jitter_min: 0.33,
            jitter_max: 1.0,
        }
    }
}

impl PlacementConfig {
    /// Returns the smallest jitter factor.
    pub fn jitter_min(&self) -> f64 {
        self.jitter_min
    }

    /// Returns the largest jitter factor.
    pub fn jitter_max(&self) -> f64 {
        self.jitter_max
    }

    /// Checks that `0 < jitter_min <= jitter_max` and both are finite.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::Config`] if the range is empty, non-positive or
    /// non-finite.
    pub fn validate(&self) -> Result<(), SprungError> {
        let valid = self.jitter_min.is_finite()
            && self.jitter_max.is_finite()
            && self.jitter_min > 0.0
            && self.jitter_min <= self.jitter_max;
        if valid {
            Ok(())
        } else {
            Err(SprungError::Config(format!(
                "placement jitter range {}..={} must satisfy 0 < jitter_min <= jitter_max",
                self.jitter_min, self.jitter_max
            )))
        }
    }
}

/// Driver loop configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of relaxation steps after which the driver stops advancing.
    max_steps: usize,

    /// Seed for placement randomness; `None` draws one from the OS.
    seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_steps: 1200,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Returns the step budget.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
