//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! - [`graph`]: discovery-order traversal from a root, optionally collecting edges.
//! - [`backward_op`]: local gradient rules, dispatched on the node's [`Op`](crate::node::Op) tag.
//! - [`backward`]: the backward engine driving the rules over a traversal.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::Traversal;
pub use backward_op::local_gradients;
pub use graph::{topological_sort, topological_sort_with_edges, Edge};
