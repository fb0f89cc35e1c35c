//! Sprung Core Types
//!
//! This crate provides the foundational types of the Sprung layout engine:
//!
//! - **Geometry**: Planar points, vectors and bounding boxes ([`geometry`] module)
//! - **Graph**: Undirected adjacency over dense node ids ([`graph`] module)
//! - **Summation**: Exactly rounded floating-point sums ([`summation`] module)

pub mod geometry;
pub mod graph;
pub mod summation;
