//! Arithmetic operations on graph nodes: `+`, `-`, `*` and constant powers.
//!
//! Each submodule holds the forward `xxx_op` function, its operator impls,
//! and the local gradient rule the backward engine dispatches to.

use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::traits::Scalar;
use crate::var::Var;

/// Implements `Var <op> scalar` and `scalar <op> Var` for the concrete float
/// types by wrapping the scalar as a leaf and delegating to the node-node
/// form with the operands in their written order.
macro_rules! impl_scalar_binary_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl_scalar_binary_op!(@impl $trait, $method, $op_fn, f32);
        impl_scalar_binary_op!(@impl $trait, $method, $op_fn, f64);
    };
    (@impl $trait:ident, $method:ident, $op_fn:path, $t:ty) => {
        impl<'g> std::ops::$trait<$t> for crate::var::Var<'g, $t> {
            type Output = crate::var::Var<'g, $t>;

            fn $method(self, rhs: $t) -> Self::Output {
                let rhs = self.wrap(rhs);
                $op_fn(self, rhs)
            }
        }

        impl<'g> std::ops::$trait<crate::var::Var<'g, $t>> for $t {
            type Output = crate::var::Var<'g, $t>;

            fn $method(self, rhs: crate::var::Var<'g, $t>) -> Self::Output {
                let lhs = rhs.wrap(self);
                $op_fn(lhs, rhs)
            }
        }
    };
}

pub mod add;
pub mod mul;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use mul::mul_op;
pub use pow::pow_op;
pub use sub::sub_op;

/// Appends a binary node `op(a, b)` holding `value`.
pub(crate) fn binary_node<'g, T: Scalar>(
    a: Var<'g, T>,
    b: Var<'g, T>,
    value: T,
    op: Op<T>,
) -> Var<'g, T> {
    a.assert_same_graph(&b);
    let graph: &'g Graph<T> = a.graph();
    let id: NodeId = graph.push(value, op, vec![a.id(), b.id()]);
    Var::new(graph, id)
}
