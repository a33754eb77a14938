use approx::assert_relative_eq;
use scalargrad_core::autograd::grad_check::{check_grad, GradCheckConfig};
use scalargrad_core::{Graph, Traversal, Var};

mod common;
use common::random_pairs;

// c = a + 2a with a = x + 1
fn diamond(g: &Graph) -> (Var<'_>, Var<'_>) {
    let x = g.leaf(2.0);
    let a = x + 1.0;
    let c = a + a * 2.0;
    (x, c)
}

#[test]
fn test_square_gradient() {
    let g = Graph::new();
    let x = g.leaf(3.0);
    let y = x.pow(2.0).unwrap();
    y.backward();
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn test_chain_gradient() {
    let g = Graph::new();
    let x = g.leaf(2.0);
    let a = x + 3.0;
    let b = a * x;
    b.backward();
    assert_eq!(x.grad(), 7.0);
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_repeated_backward_accumulates() {
    let g = Graph::new();
    let x = g.leaf(2.0);
    let b = (x + 3.0) * x;
    b.backward();
    assert_eq!(x.grad(), 7.0);
    // Intermediate accumulators are stale too: `a` enters the second pass
    // holding 2, ends at 4, and forwards all of it to `x` (7 + 5 + 4).
    b.backward();
    assert_eq!(x.grad(), 16.0);
}

#[test]
fn test_diamond_gradient_pinned_per_traversal() {
    let g = Graph::new();
    let (x, c) = diamond(&g);
    c.backward_with(Traversal::ReverseCreation);
    assert_eq!(x.grad(), 3.0);

    let g = Graph::new();
    let (x, c) = diamond(&g);
    c.backward_with(Traversal::Discovery);
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_gradients_agree_with_finite_differences() {
    for (a, b) in random_pairs(21, 16) {
        // f(u, v) = (u - v) * (u + 2) - v^2 + u * u
        let grads = check_grad(
            |_, p| Ok((p[0] - p[1]) * (p[0] + 2.0) - p[1].powf(2.0) + p[0] * p[0]),
            &[a, b],
            &GradCheckConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(grads[0], (a + 2.0) + (a - b) + 2.0 * a, max_relative = 1e-9);
        assert_relative_eq!(grads[1], -(a + 2.0) - 2.0 * b, max_relative = 1e-9);
    }
}
