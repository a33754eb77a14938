// scalargrad-core/src/ops/arithmetic/sub.rs

use super::binary_node;
use crate::node::Op;
use crate::ops::traits::Scalar;
use crate::var::Var;
use std::ops::Sub;

// --- Forward Operation ---

/// Creates the node `a - b`. Operand order is kept: `a` is the minuend.
pub fn sub_op<'g, T: Scalar>(a: Var<'g, T>, b: Var<'g, T>) -> Var<'g, T> {
    binary_node(a, b, a.value() - b.value(), Op::Sub)
}

impl<'g, T: Scalar> Sub for Var<'g, T> {
    type Output = Var<'g, T>;

    fn sub(self, rhs: Self) -> Var<'g, T> {
        sub_op(self, rhs)
    }
}

impl_scalar_binary_op!(Sub, sub, sub_op);

// --- Backward Operation ---

/// d(a - b)/da = 1, d(a - b)/db = -1.
pub(crate) fn sub_backward<T: Scalar>(grad_output: T) -> [T; 2] {
    [grad_output, -grad_output]
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
