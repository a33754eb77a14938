use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the float types a computation graph can hold.
///
/// It bounds the element type of [`Graph`](crate::graph::Graph) and every
/// [`Var`](crate::var::Var) so that forward values, gradients and power
/// exponents all share one type. Only `f32` and `f64` implement it.
pub trait Scalar:
    Float // Includes Num + Copy + NumCast + PartialOrd
    + NumAssignOps // AddAssign etc. for gradient accumulation
    + Debug
    + Display // Needed for node summaries and export labels
    + 'static
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}
