//! Sprung - a force-directed layout engine for undirected graphs.
//!
//! Nodes joined by an edge attract each other toward a resting distance while
//! every pair of nodes repels, and an adaptive step-size search moves the
//! layout toward equilibrium one step at a time.
//!
//! # Overview
//!
//! - [`Layout`] - Immutable snapshot of positions with their force field and tension
//! - [`StepSearch`] / [`improve_all`] - One relaxation step
//! - [`Simulation`] - Owner of a graph and its current layout, driving repeated steps
//! - [`placement`] - Circle placement with random jitter for seeding layouts
//! - [`force`] - Attraction and repulsion laws
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sprung::{ForceModel, Layout, improve_all, placement, graph::Graph};
//!
//! let graph = Arc::new(Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap());
//! let positions = placement::circle_placement(&graph);
//! let mut layout = Layout::with_model(graph, positions, ForceModel::default()).unwrap();
//!
//! for _ in 0..10 {
//!     layout = improve_all(&layout);
//! }
//! assert_eq!(layout.node_count(), 4);
//! ```

pub mod config;
pub mod force;
pub mod placement;

mod error;
mod layout;
mod search;
mod simulation;

pub use sprung_core::{geometry, graph, summation};

pub use error::SprungError;
pub use force::ForceModel;
pub use layout::Layout;
pub use search::{StepResult, StepSearch, improve_all};
pub use simulation::Simulation;
