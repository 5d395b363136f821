//! Use-case services over the contact graph.
//!
//! # Responsibility
//! - Orchestrate graph traversal without owning graph data.
//! - Keep scoring policy out of the graph layer.

pub mod propagation;
