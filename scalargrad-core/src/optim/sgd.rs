use crate::error::ScalarGradError;
use crate::ops::traits::Scalar;
use crate::optim::optimizer_trait::Optimizer;
use crate::var::Var;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Without momentum the update is `p' = p - lr * grad(p)`. With momentum `m`
/// each parameter keeps a velocity `v' = m * v + grad(p)` and the update is
/// `p' = p - lr * v'`.
#[derive(Debug, Clone)]
pub struct Sgd<T = f64> {
    lr: T,
    momentum: T,
    // One buffer per parameter position, created on the first step.
    velocity: Vec<T>,
}

impl<T: Scalar> Sgd<T> {
    /// Creates plain SGD with learning rate `lr`.
    pub fn new(lr: T) -> Self {
        Self::with_momentum(lr, T::zero())
    }

    /// Creates SGD with a momentum factor.
    pub fn with_momentum(lr: T, momentum: T) -> Self {
        Sgd {
            lr,
            momentum,
            velocity: Vec::new(),
        }
    }

    pub fn lr(&self) -> T {
        self.lr
    }

    pub fn set_lr(&mut self, lr: T) {
        self.lr = lr;
    }

    pub fn momentum(&self) -> T {
        self.momentum
    }
}

impl<T: Scalar> Optimizer<T> for Sgd<T> {
    fn step(&mut self, params: &[Var<'_, T>]) -> Result<Vec<T>, ScalarGradError> {
        if let Some(index) = params.iter().position(|p| !p.is_leaf()) {
            return Err(ScalarGradError::NonLeafParameter { index });
        }

        let use_momentum = self.momentum != T::zero();
        if use_momentum {
            if self.velocity.is_empty() {
                self.velocity = vec![T::zero(); params.len()];
            } else if self.velocity.len() != params.len() {
                return Err(ScalarGradError::ParameterCountMismatch {
                    expected: self.velocity.len(),
                    actual: params.len(),
                });
            }
        }

        let mut updated = Vec::with_capacity(params.len());
        for (i, param) in params.iter().enumerate() {
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!("Sgd: parameter {} has a non-finite gradient ({})", i, grad);
            }
            let direction = if use_momentum {
                let v = self.momentum * self.velocity[i] + grad;
                self.velocity[i] = v;
                v
            } else {
                grad
            };
            updated.push(param.value() - self.lr * direction);
        }
        Ok(updated)
    }

    fn reset(&mut self) {
        self.velocity.clear();
    }
}
