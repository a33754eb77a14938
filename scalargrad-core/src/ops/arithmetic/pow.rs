// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::node::Op;
use crate::ops::traits::Scalar;
use crate::var::{Operand, Var};

// --- Forward Operation ---

/// Creates the node `base ^ exponent` for a constant exponent.
pub fn pow_op<'g, T: Scalar>(base: Var<'g, T>, exponent: T) -> Var<'g, T> {
    let graph = base.graph();
    let value = base.value().powf(exponent);
    let id = graph.push(value, Op::Pow(exponent), vec![base.id()]);
    Var::new(graph, id)
}

impl<'g, T: Scalar> Var<'g, T> {
    /// Raises this node to a constant power.
    ///
    /// The exponent must be a real-number constant. Passing a node fails with
    /// [`ScalarGradError::UnsupportedOperandType`]; exponents are not
    /// differentiated.
    ///
    /// ```
    /// use scalargrad_core::Graph;
    ///
    /// let g = Graph::new();
    /// let x = g.leaf(3.0);
    /// let y = x.pow(2.0).unwrap();
    /// assert_eq!(y, 9.0);
    /// assert!(x.pow(g.leaf(2.0)).is_err());
    /// ```
    pub fn pow<E>(self, exponent: E) -> Result<Var<'g, T>, ScalarGradError>
    where
        E: Into<Operand<'g, T>>,
    {
        match exponent.into() {
            Operand::Scalar(e) => Ok(pow_op(self, e)),
            other => Err(ScalarGradError::UnsupportedOperandType {
                operation: "pow".to_string(),
                found: other.kind().to_string(),
            }),
        }
    }

    /// Infallible form of [`Var::pow`] for a constant exponent.
    pub fn powf(self, exponent: T) -> Var<'g, T> {
        pow_op(self, exponent)
    }
}

// --- Backward Operation ---

/// d(x^e)/dx = e * x^(e - 1), and 0 for `e == 0` (the result is constant).
pub(crate) fn pow_backward<T: Scalar>(grad_output: T, base: T, exponent: T) -> T {
    if exponent == T::zero() {
        return T::zero();
    }
    grad_output * exponent * base.powf(exponent - T::one())
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
