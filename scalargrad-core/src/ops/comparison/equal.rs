// scalargrad-core/src/ops/comparison/equal.rs

use crate::ops::traits::Scalar;
use crate::var::Var;

/// Value equality between two nodes.
///
/// Only the forward values are compared: identity, gradients and graph
/// structure are ignored, so two distinct nodes may compare equal. Comparison
/// is exact (`f64::eq` semantics, `NaN != NaN`); use `approx` for tolerances.
///
/// Nodes from different graphs may be compared.
impl<'a, 'b, T: Scalar> PartialEq<Var<'b, T>> for Var<'a, T> {
    fn eq(&self, other: &Var<'b, T>) -> bool {
        self.value() == other.value()
    }
}

macro_rules! impl_scalar_eq {
    ($($t:ty),*) => {
        $(
            impl<'g> PartialEq<$t> for Var<'g, $t> {
                fn eq(&self, other: &$t) -> bool {
                    self.value() == *other
                }
            }

            impl<'g> PartialEq<Var<'g, $t>> for $t {
                fn eq(&self, other: &Var<'g, $t>) -> bool {
                    *self == other.value()
                }
            }
        )*
    };
}

impl_scalar_eq!(f32, f64);

#[cfg(test)]
#[path = "equal_test.rs"]
mod tests;
