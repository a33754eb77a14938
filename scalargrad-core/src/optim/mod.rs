// scalargrad-core/src/optim/mod.rs

//! # Optimization Module
//!
//! This module provides the `Optimizer` trait and a gradient-descent
//! implementation for parameters held as leaf nodes.
//!
//! Leaf values are immutable, so an optimizer step does not modify the graph:
//! it returns the updated parameter values, from which the caller builds the
//! next iteration's graph.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
