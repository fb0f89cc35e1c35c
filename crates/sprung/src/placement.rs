//! Initial placement of nodes.
//!
//! Relaxation needs a starting layout. Nodes are first spread evenly on a
//! circle whose radius equals the node count, which keeps neighboring nodes
//! roughly the same distance apart regardless of graph size. A perfect circle
//! is a symmetric saddle for the force model, so each coordinate is then
//! scaled by an independent random factor.

use std::{f64::consts::TAU, sync::Arc};

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use sprung_core::{geometry::Point, graph::Graph};

use crate::{config::PlacementConfig, error::SprungError, force::ForceModel, layout::Layout};

/// Places node `i` of `N` at angle `2πi/N` on a circle of radius `N`.
///
/// # Examples
///
/// ```
/// # use sprung::{placement::circle_placement, graph::Graph};
/// let positions = circle_placement(&Graph::new(4));
///
/// assert_eq!(positions.len(), 4);
/// assert_eq!(positions[0].x(), 4.0);
/// assert_eq!(positions[0].y(), 0.0);
/// ```
pub fn circle_placement(graph: &Graph) -> Vec<Point> {
    let node_count = graph.node_count();
    let radius = node_count as f64;
    (0..node_count)
        .map(|i| {
            let angle = TAU * i as f64 / radius;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Source of randomized placements.
///
/// Owns its random number generator, so a placement seeded with the same
/// value always produces the same sequence of layouts.
#[derive(Debug, Clone)]
pub struct Placement {
    rng: StdRng,
    jitter_min: f64,
    jitter_max: f64,
}

impl Placement {
    /// Creates a placement with the configured jitter range.
    ///
    /// With `seed` set, placements are reproducible; otherwise the generator
    /// is seeded from the thread-local entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::Config`] if the jitter range is invalid.
    pub fn new(config: &PlacementConfig, seed: Option<u64>) -> Result<Self, SprungError> {
        config.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            rng,
            jitter_min: config.jitter_min(),
            jitter_max: config.jitter_max(),
        })
    }

    /// Scales each axis of each point by an independent random factor drawn
    /// from the jitter range.
    pub fn randomize(&mut self, positions: &[Point]) -> Vec<Point> {
        positions
            .iter()
            .map(|position| {
                let factor_x = self.rng.random_range(self.jitter_min..=self.jitter_max);
                let factor_y = self.rng.random_range(self.jitter_min..=self.jitter_max);
                position.scale_axes(factor_x, factor_y)
            })
            .collect()
    }

    /// Builds a starting layout: circle placement followed by [`Self::randomize`].
    pub fn seed_layout(&mut self, graph: Arc<Graph>, model: ForceModel) -> Layout {
        let positions = self.randomize(&circle_placement(&graph));
        debug!(node_count = graph.node_count(); "Seeded circle placement");
        Layout::from_positions(graph, model, positions)
    }

    /// Re-jitters the positions of an existing layout.
    pub fn jitter_layout(&mut self, layout: &Layout) -> Layout {
        let positions = self.randomize(layout.positions());
        Layout::from_positions(Arc::clone(layout.graph()), layout.model(), positions)
    }
}
