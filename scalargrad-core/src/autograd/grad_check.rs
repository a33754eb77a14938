use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::ops::traits::Scalar;
use crate::var::Var;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 for reporting whatever the graph type
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig<T = f64> {
    /// Half-width of the central difference.
    pub epsilon: T,
    /// Differences at or below this are always accepted.
    pub abs_tolerance: T,
    /// Accepted difference relative to the larger gradient magnitude.
    pub rel_tolerance: T,
}

impl<T: Scalar> Default for GradCheckConfig<T> {
    /// Step of `cbrt(machine epsilon)`: about `6e-6` for f64, `5e-3` for f32.
    /// Single precision gets looser tolerances.
    fn default() -> Self {
        let single_precision = T::epsilon() > constant(1e-10);
        let (abs_tolerance, rel_tolerance) = if single_precision {
            (1e-3, 1e-2)
        } else {
            (1e-5, 1e-4)
        };
        GradCheckConfig {
            epsilon: T::epsilon().cbrt(),
            abs_tolerance: constant(abs_tolerance),
            rel_tolerance: constant(rel_tolerance),
        }
    }
}

fn constant<T: Scalar>(value: f64) -> T {
    num_traits::cast(value).unwrap_or_else(T::epsilon)
}

fn report<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds an expression from one leaf per entry of `inputs` and
/// returns its output node. Every evaluation runs on a fresh [`Graph`], so
/// gradients never leak between the analytical pass and the perturbed ones.
///
/// Returns the analytical gradients, in input order, when all of them agree
/// with the numerical estimate.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    config: &GradCheckConfig<T>,
) -> Result<Vec<T>, GradCheckError>
where
    T: Scalar,
    F: for<'g> Fn(&'g Graph<T>, &[Var<'g, T>]) -> Result<Var<'g, T>, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let analytical: Vec<T> = {
        let graph = Graph::<T>::with_capacity(inputs.len());
        let leaves: Vec<Var<'_, T>> = inputs.iter().map(|&v| graph.leaf(v)).collect();
        let output = func(&graph, &leaves)?;
        output.backward();
        leaves.iter().map(|leaf| leaf.grad()).collect()
    };

    let two = T::one() + T::one();
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        // --- 2. Numerical gradient for input i ---
        let mut perturbed = inputs.to_vec();
        perturbed[i] = inputs[i] + config.epsilon;
        let loss_plus = evaluate(&func, &perturbed)?;
        perturbed[i] = inputs[i] - config.epsilon;
        let loss_minus = evaluate(&func, &perturbed)?;
        let numerical_grad = (loss_plus - loss_minus) / (two * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus: report(loss_plus),
                loss_minus: report(loss_minus),
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: report(analytical_grad),
            });
        }

        // --- 3. Compare ---
        let difference = (analytical_grad - numerical_grad).abs();
        let scale = analytical_grad.abs().max(numerical_grad.abs());
        log::debug!(
            "grad_check: input {} analytical={} numerical={} diff={}",
            i,
            analytical_grad,
            numerical_grad,
            difference
        );
        if difference > config.abs_tolerance && difference > config.rel_tolerance * scale {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: report(analytical_grad),
                numerical_grad: report(numerical_grad),
                difference: report(difference),
            });
        }
    }

    Ok(analytical)
}

/// Forward value of `func` at `values`, on a throwaway graph.
fn evaluate<T, F>(func: &F, values: &[T]) -> Result<T, GradCheckError>
where
    T: Scalar,
    F: for<'g> Fn(&'g Graph<T>, &[Var<'g, T>]) -> Result<Var<'g, T>, ScalarGradError>,
{
    let graph = Graph::<T>::with_capacity(values.len());
    let leaves: Vec<Var<'_, T>> = values.iter().map(|&v| graph.leaf(v)).collect();
    let output = func(&graph, &leaves)?;
    Ok(output.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
