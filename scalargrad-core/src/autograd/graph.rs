use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::var::Var;
use std::collections::HashSet;

/// A dependency edge: `dependent` was computed from `operand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub operand: NodeId,
    pub dependent: NodeId,
}

/// Lists every node reachable from `root` through operand links, each once,
/// in discovery order.
///
/// A node is recorded as soon as it is first visited, before its operands;
/// operands are then explored depth-first in operand order. The visited set
/// is keyed on [`NodeId`], never on value. An explicit work stack replaces
/// recursion, so long chains do not exhaust the call stack.
pub fn topological_sort<T: Scalar>(graph: &Graph<T>, root: NodeId) -> Vec<NodeId> {
    walk(graph, root, None)
}

/// Like [`topological_sort`], also returning `(operand, dependent)` edges in
/// the order they are discovered.
///
/// Every operand link of every visited node yields one edge, including links
/// into nodes visited earlier, so the edge list describes the whole reachable
/// subgraph.
pub fn topological_sort_with_edges<T: Scalar>(
    graph: &Graph<T>,
    root: NodeId,
) -> (Vec<NodeId>, Vec<Edge>) {
    let mut edges = Vec::new();
    let order = walk(graph, root, Some(&mut edges));
    (order, edges)
}

fn walk<T: Scalar>(
    graph: &Graph<T>,
    root: NodeId,
    mut edges: Option<&mut Vec<Edge>>,
) -> Vec<NodeId> {
    let nodes = graph.nodes.borrow();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            log::trace!("[topological_sort] node {} already visited", id);
            continue;
        }
        let operands = &nodes[id.0].operands;
        if let Some(edges) = edges.as_deref_mut() {
            edges.extend(operands.iter().map(|&operand| Edge {
                operand,
                dependent: id,
            }));
        }
        order.push(id);
        // Reversed so the first operand is explored first.
        stack.extend(operands.iter().rev().copied());
    }
    order
}

impl<'g, T: Scalar> Var<'g, T> {
    /// Discovery-order list of the nodes this node depends on, itself first.
    pub fn topo_sort(&self) -> Vec<NodeId> {
        topological_sort(self.graph(), self.id())
    }

    /// [`Var::topo_sort`] plus the discovered `(operand, dependent)` edges.
    pub fn topo_sort_with_edges(&self) -> (Vec<NodeId>, Vec<Edge>) {
        topological_sort_with_edges(self.graph(), self.id())
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
