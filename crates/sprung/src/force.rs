//! Spring-embedder force model.
//!
//! Forces are computed from the *relative offset* between two nodes, the
//! vector from the acting node to the other node. They never look at absolute
//! coordinates, which makes every derived quantity translation invariant.
//!
//! - [`attraction`] pulls adjacent nodes toward a resting distance (the edge
//!   length) and pushes them apart when closer than that.
//! - [`repulsion`] pushes every pair of nodes apart with a magnitude inversely
//!   proportional to their distance.
//!
//! Coincident nodes produce no force in either function.

use indexmap::IndexSet;
use sprung_core::{
    geometry::Point,
    graph::{Graph, NodeId},
    summation::precise_sum,
};

use crate::{config::ForceConfig, error::SprungError};

/// Default resting distance between adjacent nodes.
pub const DEFAULT_EDGE_LENGTH: f64 = 10.0;

/// Attraction exerted on a node by one of its neighbors.
///
/// The result points toward the neighbor when `offset` is longer than
/// `edge_length` and away from it when shorter; its magnitude grows linearly
/// with the distance error. A zero `offset` yields the zero vector.
///
/// # Examples
///
/// ```
/// # use sprung::{force::attraction, geometry::Point};
/// // Twice the edge length away: pulled toward the neighbor
/// let pull = attraction(Point::new(20.0, 0.0), 10.0);
/// assert_eq!(pull, Point::new(0.5, 0.0));
///
/// // Exactly at rest
/// assert!(attraction(Point::new(0.0, 10.0), 10.0).is_zero());
/// ```
pub fn attraction(offset: Point, edge_length: f64) -> Point {
    let distance = offset.hypot();
    if distance == 0.0 {
        return Point::zero();
    }
    let magnitude = (distance - edge_length) / (edge_length * 2.0);
    offset.scale(magnitude / distance)
}

/// Repulsion exerted on a node by any other node.
///
/// Returns `-2 * offset / |offset|²`, pointing away from the other node with
/// magnitude `2 / |offset|`. A zero `offset` yields the zero vector.
///
/// # Examples
///
/// ```
/// # use sprung::{force::repulsion, geometry::Point};
/// let push = repulsion(Point::new(4.0, 0.0));
/// assert_eq!(push, Point::new(-0.5, 0.0));
/// ```
pub fn repulsion(offset: Point) -> Point {
    let distance_squared = offset.hypot_squared();
    if distance_squared == 0.0 {
        return Point::zero();
    }
    offset.scale(-2.0 / distance_squared)
}

/// Sum of force magnitudes, the scalar distance from equilibrium.
pub fn tension(delta: &[Point]) -> f64 {
    precise_sum(delta.iter().map(|force| force.hypot()))
}

/// The force model applied to every layout of a graph.
///
/// Only the target edge length is tunable; the repulsion law is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    edge_length: f64,
}

impl Default for ForceModel {
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE_LENGTH,
        }
    }
}

impl ForceModel {
    /// Creates a force model with the given edge length.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::Config`] unless `edge_length` is finite and
    /// strictly positive.
    pub fn new(edge_length: f64) -> Result<Self, SprungError> {
        if edge_length.is_finite() && edge_length > 0.0 {
            Ok(Self { edge_length })
        } else {
            Err(SprungError::Config(format!(
                "edge length must be a positive finite number, got {edge_length}"
            )))
        }
    }

    /// Creates a force model from its configuration section.
    ///
    /// # Errors
    ///
    /// See [`ForceModel::new`].
    pub fn from_config(config: &ForceConfig) -> Result<Self, SprungError> {
        Self::new(config.edge_length())
    }

    /// Returns the resting distance between adjacent nodes.
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// Attraction using this model's edge length.
    pub fn attraction(&self, offset: Point) -> Point {
        attraction(offset, self.edge_length)
    }

    /// Computes the net force on every node of `graph` at `positions`.
    ///
    /// `positions` must hold exactly one point per node of `graph`.
    pub(crate) fn delta_field(&self, graph: &Graph, positions: &[Point]) -> Vec<Point> {
        debug_assert_eq!(graph.node_count(), positions.len());

        graph
            .adjacency()
            .enumerate()
            .map(|(node, neighbors)| self.node_delta(positions, node, neighbors))
            .collect()
    }

    /// Net force on `node`: attraction from each neighbor plus repulsion from
    /// every other node, each axis summed exactly.
    fn node_delta(
        &self,
        positions: &[Point],
        node: NodeId,
        neighbors: &IndexSet<NodeId>,
    ) -> Point {
        let origin = positions[node];

        let attractions = neighbors
            .iter()
            .filter(|&&neighbor| neighbor != node)
            .map(|&neighbor| self.attraction(positions[neighbor].sub_point(origin)));
        let repulsions = positions
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != node)
            .map(|(_, &other)| repulsion(other.sub_point(origin)));

        let forces: Vec<Point> = attractions.chain(repulsions).collect();
        Point::new(
            precise_sum(forces.iter().map(|force| force.x())),
            precise_sum(forces.iter().map(|force| force.y())),
        )
    }
}
