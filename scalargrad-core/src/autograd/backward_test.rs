use super::*;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_backward_square() {
    let g = Graph::new();
    let x = g.leaf(3.0);
    let y = x.pow(2.0).unwrap();
    y.backward();
    assert_relative_eq!(y.grad(), 1.0);
    assert_relative_eq!(x.grad(), 6.0);
}

#[test]
fn test_backward_chain() {
    let g = Graph::new();
    let x = g.leaf(2.0);
    let a = x + 3.0;
    let b = a * x;
    assert_eq!(a, 5.0);
    assert_eq!(b, 10.0);
    b.backward();
    assert_relative_eq!(x.grad(), 7.0);
    assert_relative_eq!(a.grad(), 2.0);
}

#[test]
fn test_backward_chain_same_in_both_traversals() {
    for traversal in [Traversal::ReverseCreation, Traversal::Discovery] {
        let g = Graph::new();
        let x = g.leaf(2.0);
        let b = (x + 3.0) * x;
        b.backward_with(traversal);
        assert_relative_eq!(x.grad(), 7.0);
    }
}

#[test]
fn test_backward_on_leaf_only_seeds() {
    let g = Graph::new();
    let x = g.leaf(4.0);
    x.backward();
    assert_relative_eq!(x.grad(), 1.0);
}

#[test]
fn test_backward_twice_accumulates() {
    let g = Graph::new();
    let x = g.leaf(3.0);
    let y = x.pow(2.0).unwrap();
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);
    // No automatic reset: the second pass stacks on the first.
    y.backward();
    assert_relative_eq!(x.grad(), 12.0);
    // The root is re-seeded, not accumulated.
    assert_relative_eq!(y.grad(), 1.0);
}

#[test]
fn test_backward_after_zero_grad_is_fresh() {
    let g = Graph::new();
    let x = g.leaf(3.0);
    let y = x.pow(2.0).unwrap();
    y.backward();
    g.zero_grad();
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);
}

// c = a + b, a = x + 1, b = 2a  =>  dc/dx = 3
fn diamond(g: &Graph) -> (Var<'_>, Var<'_>, Var<'_>) {
    let x = g.leaf(2.0);
    let a = x + 1.0;
    let b = a * 2.0;
    let c = a + b;
    (x, a, c)
}

#[test]
fn test_diamond_reverse_creation_counts_every_path() {
    let g = Graph::new();
    let (x, a, c) = diamond(&g);
    assert_eq!(c, 9.0);
    c.backward();
    assert_relative_eq!(a.grad(), 3.0);
    assert_relative_eq!(x.grad(), 3.0);
}

#[test]
fn test_diamond_discovery_order_undercounts() {
    let g = Graph::new();
    let (x, a, c) = diamond(&g);
    c.backward_with(Traversal::Discovery);
    // `a` propagates before `b` has pushed its share into it.
    assert_relative_eq!(a.grad(), 3.0);
    assert_relative_eq!(x.grad(), 1.0);
}

#[test]
fn test_shared_operand_in_two_outputs_keeps_both_rules() {
    let g = Graph::new();
    let x = g.leaf(3.0);
    let y = x * 2.0;
    let z = x * 5.0;
    let total = y + z;
    total.backward();
    assert_relative_eq!(x.grad(), 7.0);
}

#[test]
fn test_backward_from_intermediate_node() {
    let g = Graph::new();
    let x = g.leaf(2.0);
    let a = x.powf(3.0);
    let b = a * 10.0;
    a.backward();
    assert_relative_eq!(x.grad(), 12.0);
    // `b` is downstream of `a` and is not touched.
    assert_relative_eq!(b.grad(), 0.0);
}

#[test]
fn test_leaf_values_are_not_mutated_by_backward() {
    let g = Graph::new();
    let x = g.leaf(1.5);
    let y = (x - 4.0) * x;
    let before = x.node();
    y.backward();
    let after = x.node();
    assert_eq!(before.value, after.value);
    assert_eq!(before.op, after.op);
    assert_eq!(before.operands, after.operands);
    assert_ne!(before.grad, after.grad);
}

#[test]
fn test_long_chain_backward() {
    let g = Graph::new();
    let x = g.leaf(1.0);
    let mut y = x;
    for _ in 0..20_000 {
        y = y * 1.0;
    }
    y.backward();
    assert_relative_eq!(x.grad(), 1.0);
}

#[test]
fn test_discovery_order_accumulates_sibling_rules() {
    let g = Graph::new();
    let x = g.leaf(3.0);
    let total = x * 2.0 + x * 5.0;
    total.backward_with(Traversal::Discovery);
    // Both products feed x directly, so neither contribution is lost.
    assert_relative_eq!(x.grad(), 7.0);
}
