//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Expressions built from [`Var`] handles record a computation graph in a
//! [`Graph`] arena as they are evaluated. Calling [`Var::backward`] on a result
//! walks that graph once and accumulates `d(result)/d(node)` into every node
//! it depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let g = Graph::new();
//! let x = g.leaf(3.0);
//! let y = x.pow(2.0)?;
//! y.backward();
//! assert_eq!(x.grad(), 6.0);
//! # Ok::<(), scalargrad_core::ScalarGradError>(())
//! ```

// Core data model
pub mod graph;
pub mod node;
pub mod var;

// Operations and differentiation
pub mod autograd;
pub mod ops;

// Peripheral surfaces
pub mod export;
pub mod optim;

pub mod error;

pub use autograd::{Edge, Traversal};
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{Node, NodeId, Op};
pub use ops::traits::Scalar;
pub use var::{Operand, Var};
// Re-export traits required by public bounds
pub use num_traits;
