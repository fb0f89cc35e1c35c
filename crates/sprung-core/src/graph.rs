//! Undirected graph topology.
//!
//! A [`Graph`] stores nothing but adjacency: for each of its `node_count`
//! nodes, the set of neighbor ids. Coordinates live elsewhere, so a single
//! graph can be shared by any number of layouts.
//!
//! Node ids are dense indices in `0..node_count`.

use indexmap::IndexSet;
use thiserror::Error;

/// Dense index of a node inside a [`Graph`].
pub type NodeId = usize;

/// Errors raised while building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    OutOfRange { node: NodeId, node_count: usize },
}

/// An undirected graph over a fixed number of nodes.
///
/// Edges are symmetric: adding `(a, b)` makes `b` a neighbor of `a` and `a` a
/// neighbor of `b`. Neighbors are kept in insertion-ordered sets, so repeating
/// an edge has no effect. A self-loop records the node as its own neighbor once; the force
/// model never pairs a node with itself, so the loop contributes nothing.
///
/// # Examples
///
/// ```
/// # use sprung_core::graph::Graph;
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
///
/// let neighbors: Vec<_> = graph.neighbors(1).unwrap().iter().copied().collect();
/// assert_eq!(neighbors, [0, 2]);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.add_edge(0, 3).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<IndexSet<NodeId>>,
}

impl Graph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![IndexSet::new(); node_count],
        }
    }

    /// Creates a graph from a list of edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] for the first edge that references a
    /// node outside `0..node_count`.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(node_count);
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of distinct undirected edges, self-loops excluded.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds the undirected edge `(a, b)`.
    ///
    /// Both endpoints are validated before anything is recorded, so a failed
    /// call leaves the graph untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] if either endpoint is not a node of
    /// this graph.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;

        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
        Ok(())
    }

    /// Returns the neighbors of `node` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] if `node` is not a node of this graph.
    pub fn neighbors(&self, node: NodeId) -> Result<&IndexSet<NodeId>, GraphError> {
        self.check_node(node)?;
        Ok(&self.adjacency[node])
    }

    /// Iterates over every node's neighbor list, indexed by node id.
    pub fn adjacency(&self) -> impl ExactSizeIterator<Item = &IndexSet<NodeId>> {
        self.adjacency.iter()
    }

    /// Iterates over each undirected edge once, as `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(NodeId, NodeId)>)> {
        (1usize..24).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..64)))
    }

    /// Every recorded neighbor relation appears in both directions.
    fn check_adjacency_is_symmetric(
        node_count: usize,
        edges: Vec<(NodeId, NodeId)>,
    ) -> Result<(), TestCaseError> {
        let graph = Graph::from_edges(node_count, edges.iter().copied()).unwrap();

        for (a, b) in edges {
            prop_assert!(graph.neighbors(a).unwrap().contains(&b));
            prop_assert!(graph.neighbors(b).unwrap().contains(&a));
        }
        for (a, neighbors) in graph.adjacency().enumerate() {
            for &b in neighbors {
                prop_assert!(b < node_count);
                prop_assert!(graph.neighbors(b).unwrap().contains(&a));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric((node_count, edges) in edges_strategy()) {
            check_adjacency_is_symmetric(node_count, edges)?;
        }
    }
}
