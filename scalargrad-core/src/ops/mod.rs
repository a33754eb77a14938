//! # Node Operations Module (`ops`)
//!
//! This module collects everything that creates nodes from other nodes or
//! compares them.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`,
//!   `sub_op`, `mul_op`, `pow_op`) that computes the forward value and appends
//!   the output node to the graph. The `std::ops` impls on
//!   [`Var`](crate::var::Var) call these.
//! - **Backward rules:** Next to each forward function sits a `xxx_backward`
//!   function computing the local gradient contribution for each operand. The
//!   backward engine dispatches to them from
//!   [`autograd::backward_op`](crate::autograd::backward_op).
//! - **Traits (`ops::traits`):** The `Scalar` bound shared by all operations.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: `+`, `-`, `*` (node or raw scalar on either side) and constant powers.
//! - [`comparison`]: value equality between nodes and scalars.

pub mod arithmetic;
pub mod comparison;
pub mod traits;
