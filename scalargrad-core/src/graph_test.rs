use super::*;
use std::collections::HashSet;

#[test]
fn test_leaf_starts_with_zero_grad() {
    let g = Graph::new();
    let x = g.leaf(5.0);
    let node = g.node(x.id()).unwrap();
    assert_eq!(node.value, 5.0);
    assert_eq!(node.grad, 0.0);
    assert_eq!(node.op, Op::Assign);
    assert!(node.is_leaf());
}

#[test]
fn test_leaves_get_fresh_operand_lists() {
    let g = Graph::new();
    let a = g.leaf(1.0);
    let b = g.leaf(2.0);
    let _sum = a + b;
    // Building on `a` must not leak operands into other leaves.
    assert!(g.node(a.id()).unwrap().operands.is_empty());
    assert!(g.node(b.id()).unwrap().operands.is_empty());
}

#[test]
fn test_ids_follow_creation_order() {
    let g = Graph::new();
    let a = g.leaf(1.0);
    let b = g.leaf(2.0);
    let c = a * b;
    assert!(a.id() < b.id());
    assert!(b.id() < c.id());
    assert_eq!(g.len(), 3);
    let ids: Vec<NodeId> = g.nodes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![a.id(), b.id(), c.id()]);
}

#[test]
fn test_equal_values_are_distinct_identities() {
    let g = Graph::new();
    let a = g.leaf(5.0);
    let b = g.leaf(5.0);
    assert!(a == b);
    let set: HashSet<NodeId> = [a.id(), b.id()].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_var_lookup_out_of_range() {
    let g: Graph<f64> = Graph::new();
    assert!(g.var(NodeId(0)).is_none());
    let x = g.leaf(1.0);
    assert_eq!(g.var(x.id()).map(|v| v.value()), Some(1.0));
    assert!(g.node(NodeId(10)).is_none());
}

#[test]
fn test_zero_grad_resets_every_node() {
    let g = Graph::new();
    let x = g.leaf(3.0);
    let y = x.powf(2.0);
    y.backward();
    assert_eq!(x.grad(), 6.0);
    g.zero_grad();
    assert!(g.nodes().iter().all(|n| n.grad == 0.0));
}

#[test]
fn test_debug_reports_length() {
    let g = Graph::with_capacity(4);
    assert!(g.is_empty());
    let _ = g.leaf(1.0f32);
    assert_eq!(format!("{:?}", g), "Graph(len=1)");
}
