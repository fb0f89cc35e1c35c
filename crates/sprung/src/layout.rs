//! Immutable layout snapshots.
//!
//! A [`Layout`] pairs a position for every node of a shared [`Graph`] with the
//! force field (delta) and tension derived from those positions. The derived
//! values are computed once, at construction, and a layout is never mutated
//! afterwards: moving nodes produces a new layout.

use std::sync::Arc;

use sprung_core::{
    geometry::{Bounds, Point},
    graph::{Graph, NodeId},
};

use crate::{
    error::SprungError,
    force::{self, ForceModel},
};

/// Node positions of a graph together with their force field and tension.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use sprung::{Layout, geometry::Point, graph::Graph};
/// let graph = Arc::new(Graph::from_edges(2, [(0, 1)]).unwrap());
/// let layout = Layout::new(graph, vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)]).unwrap();
///
/// assert_eq!(layout.node_count(), 2);
/// assert!(layout.tension() > 0.0);
/// assert_eq!(layout.edges().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    graph: Arc<Graph>,
    model: ForceModel,
    positions: Vec<Point>,
    delta: Vec<Point>,
    tension: f64,
}

impl Layout {
    /// Creates a layout using the default [`ForceModel`].
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::PositionCount`] if `positions` does not hold
    /// exactly one point per node of `graph`.
    pub fn new(graph: Arc<Graph>, positions: Vec<Point>) -> Result<Self, SprungError> {
        Self::with_model(graph, positions, ForceModel::default())
    }

    /// Creates a layout whose forces follow `model`.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::PositionCount`] if `positions` does not hold
    /// exactly one point per node of `graph`.
    pub fn with_model(
        graph: Arc<Graph>,
        positions: Vec<Point>,
        model: ForceModel,
    ) -> Result<Self, SprungError> {
        if positions.len() != graph.node_count() {
            return Err(SprungError::PositionCount {
                expected: graph.node_count(),
                actual: positions.len(),
            });
        }
        Ok(Self::from_positions(graph, model, positions))
    }

    /// Builds a layout from positions already known to match the graph.
    pub(crate) fn from_positions(graph: Arc<Graph>, model: ForceModel, positions: Vec<Point>) -> Self {
        let delta = model.delta_field(&graph, &positions);
        let tension = force::tension(&delta);
        Self {
            graph,
            model,
            positions,
            delta,
            tension,
        }
    }

    /// Returns a new layout over the same graph with different positions.
    ///
    /// # Errors
    ///
    /// Returns [`SprungError::PositionCount`] if the number of positions changes.
    pub fn with_positions(&self, positions: Vec<Point>) -> Result<Self, SprungError> {
        Self::with_model(Arc::clone(&self.graph), positions, self.model)
    }

    /// Moves every node along its force vector scaled by `scale`.
    pub fn moved(&self, scale: f64) -> Self {
        let positions = self
            .positions
            .iter()
            .zip(&self.delta)
            .map(|(position, delta)| position.add_point(delta.scale(scale)))
            .collect();
        Self::from_positions(Arc::clone(&self.graph), self.model, positions)
    }

    /// Shifts every node by the same offset.
    pub fn translated(&self, offset: Point) -> Self {
        let positions = self
            .positions
            .iter()
            .map(|position| position.add_point(offset))
            .collect();
        Self::from_positions(Arc::clone(&self.graph), self.model, positions)
    }

    /// Translates the layout so its bounding box is centered on the origin.
    pub fn centered(&self) -> Self {
        match self.bounds() {
            Some(bounds) => self.translated(bounds.center().negate()),
            None => self.clone(),
        }
    }

    /// Returns the graph this layout positions.
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Returns the force model used to derive the delta field.
    pub fn model(&self) -> ForceModel {
        self.model
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns every node position, indexed by node id.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Returns the position of `node`, if it exists.
    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.positions.get(node).copied()
    }

    /// Returns the net force on every node, indexed by node id.
    pub fn delta(&self) -> &[Point] {
        &self.delta
    }

    /// Returns the sum of force magnitudes; lower is closer to equilibrium.
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Returns the distance between two nodes, if both exist.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Option<f64> {
        Some(self.position(a)?.distance(self.position(b)?))
    }

    /// Iterates over the endpoint positions of each undirected edge once.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.graph
            .edges()
            .map(|(a, b)| (self.positions[a], self.positions[b]))
    }

    /// Returns the bounding box of all positions, or `None` for an empty graph.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.positions.iter().copied())
    }

    /// Returns the diagonal of the bounding box, `0.0` for an empty graph.
    ///
    /// Renderers use this to pick a display scale; it plays no part in the
    /// relaxation.
    pub fn approx_diameter(&self) -> f64 {
        self.bounds().map_or(0.0, Bounds::diagonal)
    }
}
