use crate::error::ScalarGradError;
use crate::ops::traits::Scalar;
use crate::var::Var;

/// Trait defining the common interface for optimizers.
///
/// Optimizers turn the gradients accumulated on parameter leaves into new
/// parameter values.
pub trait Optimizer<T: Scalar> {
    /// Performs a single optimization step.
    ///
    /// `params` must be leaf nodes whose gradients have already been computed
    /// by a backward pass. The returned vector holds the updated value of each
    /// parameter, in the same order.
    fn step(&mut self, params: &[Var<'_, T>]) -> Result<Vec<T>, ScalarGradError>;

    /// Drops any per-parameter state (e.g. momentum buffers).
    fn reset(&mut self);
}
