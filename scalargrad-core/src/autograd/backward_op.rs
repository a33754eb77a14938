use crate::node::Op;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use crate::ops::arithmetic::sub::sub_backward;
use crate::ops::traits::Scalar;

/// Computes the gradient contribution for each operand of a node.
///
/// `grad_output` is the node's accumulated gradient and `inputs` holds the
/// forward values of its operands, in operand order. The returned vector has
/// one entry per operand, in the same order; a leaf yields an empty vector.
///
/// | op       | contribution to operand 0 | contribution to operand 1 |
/// |----------|---------------------------|---------------------------|
/// | `Add`    | `L`                       | `L`                       |
/// | `Sub`    | `L`                       | `-L`                      |
/// | `Mul`    | `L * y`                   | `L * x`                   |
/// | `Pow(e)` | `L * e * x^(e-1)`         |                           |
///
/// # Panics
/// If `inputs.len()` does not match the arity of `op`.
pub fn local_gradients<T: Scalar>(op: Op<T>, grad_output: T, inputs: &[T]) -> Vec<T> {
    assert_eq!(
        inputs.len(),
        op.arity(),
        "{} expects {} operand values, got {}",
        op.name(),
        op.arity(),
        inputs.len()
    );
    match op {
        Op::Assign => Vec::new(),
        Op::Add => add_backward(grad_output).to_vec(),
        Op::Sub => sub_backward(grad_output).to_vec(),
        Op::Mul => mul_backward(grad_output, inputs[0], inputs[1]).to_vec(),
        Op::Pow(exponent) => vec![pow_backward(grad_output, inputs[0], exponent)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leaf_has_no_contributions() {
        assert!(local_gradients(Op::<f64>::Assign, 1.0, &[]).is_empty());
    }

    #[test]
    fn test_dispatch_per_op() {
        assert_eq!(local_gradients(Op::Add, 2.0f64, &[5.0, 7.0]), vec![2.0, 2.0]);
        assert_eq!(local_gradients(Op::Sub, 2.0f64, &[5.0, 7.0]), vec![2.0, -2.0]);
        assert_eq!(local_gradients(Op::Mul, 2.0f64, &[5.0, 7.0]), vec![14.0, 10.0]);
        let pow = local_gradients(Op::Pow(2.0f64), 1.0, &[3.0]);
        assert_eq!(pow.len(), 1);
        assert_relative_eq!(pow[0], 6.0);
    }

    #[test]
    #[should_panic(expected = "mul expects 2 operand values")]
    fn test_arity_mismatch_panics() {
        let _ = local_gradients(Op::Mul, 1.0f64, &[1.0]);
    }
}
