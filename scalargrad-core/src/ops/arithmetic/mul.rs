// scalargrad-core/src/ops/arithmetic/mul.rs

use super::binary_node;
use crate::node::Op;
use crate::ops::traits::Scalar;
use crate::var::Var;
use std::ops::Mul;

// --- Forward Operation ---

/// Creates the node `a * b`.
pub fn mul_op<'g, T: Scalar>(a: Var<'g, T>, b: Var<'g, T>) -> Var<'g, T> {
    binary_node(a, b, a.value() * b.value(), Op::Mul)
}

impl<'g, T: Scalar> Mul for Var<'g, T> {
    type Output = Var<'g, T>;

    fn mul(self, rhs: Self) -> Var<'g, T> {
        mul_op(self, rhs)
    }
}

impl_scalar_binary_op!(Mul, mul, mul_op);

// --- Backward Operation ---

/// d(a * b)/da = b, d(a * b)/db = a.
pub(crate) fn mul_backward<T: Scalar>(grad_output: T, a: T, b: T) -> [T; 2] {
    [grad_output * b, grad_output * a]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
