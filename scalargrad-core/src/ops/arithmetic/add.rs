// scalargrad-core/src/ops/arithmetic/add.rs

use super::binary_node;
use crate::node::Op;
use crate::ops::traits::Scalar;
use crate::var::Var;
use std::ops::Add;

// --- Forward Operation ---

/// Creates the node `a + b`.
pub fn add_op<'g, T: Scalar>(a: Var<'g, T>, b: Var<'g, T>) -> Var<'g, T> {
    binary_node(a, b, a.value() + b.value(), Op::Add)
}

impl<'g, T: Scalar> Add for Var<'g, T> {
    type Output = Var<'g, T>;

    fn add(self, rhs: Self) -> Var<'g, T> {
        add_op(self, rhs)
    }
}

impl_scalar_binary_op!(Add, add, add_op);

// --- Backward Operation ---

/// d(a + b)/da = 1, d(a + b)/db = 1.
pub(crate) fn add_backward<T: Scalar>(grad_output: T) -> [T; 2] {
    [grad_output, grad_output]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
