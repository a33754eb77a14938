use super::backward_op::local_gradients;
use super::graph::topological_sort;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::var::Var;

/// Order in which the backward engine applies local gradient rules.
///
/// Both variants visit the same set of nodes (everything reachable from the
/// root) and apply each node's rule exactly once. They only differ when a
/// node is shared by several dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Descending creation order. Every dependent of a node is created after
    /// it, so a node's rule runs only once its gradient has received all
    /// contributions from the reachable graph.
    #[default]
    ReverseCreation,
    /// Raw discovery order of [`topological_sort`]. Only the order changes:
    /// every node still keeps its own rule and every contribution still
    /// accumulates. Matches `ReverseCreation` on trees, but a shared node
    /// discovered before one of its dependents propagates before that
    /// dependent's contribution arrives.
    Discovery,
}

/// Runs a backward pass from `root`.
///
/// The root's gradient is set to one (not accumulated); every other reachable
/// node accumulates into its current gradient. Gradients are never reset
/// here, so a second pass over the same graph adds on top of the first.
pub fn backward<T: Scalar>(graph: &Graph<T>, root: NodeId, traversal: Traversal) {
    let mut order = topological_sort(graph, root);
    if traversal == Traversal::ReverseCreation {
        order.sort_unstable_by(|a, b| b.cmp(a));
    }
    log::debug!(
        "backward() from node {} over {} nodes ({:?})",
        root,
        order.len(),
        traversal
    );

    let mut nodes = graph.nodes.borrow_mut();
    if nodes[root.0].operands.is_empty() {
        log::debug!("backward() called on a leaf node. No operation to perform.");
    }
    nodes[root.0].grad = T::one();

    for id in order {
        let node = &nodes[id.0];
        if node.operands.is_empty() {
            continue;
        }
        let op = node.op;
        let grad_output = node.grad;
        let operands = node.operands.clone();
        let inputs: Vec<T> = operands.iter().map(|operand| nodes[operand.0].value).collect();

        let contributions = local_gradients(op, grad_output, &inputs);
        for (operand, delta) in operands.iter().zip(contributions) {
            nodes[operand.0].grad += delta;
            log::trace!("[backward] {} -> {}: += {}", id, operand, delta);
        }
    }
}

impl<'g, T: Scalar> Var<'g, T> {
    /// Computes the gradient of this node with respect to every node it
    /// depends on, using [`Traversal::ReverseCreation`].
    ///
    /// Read the results afterwards with [`Var::grad`].
    ///
    /// ```
    /// use scalargrad_core::Graph;
    ///
    /// let g = Graph::new();
    /// let x = g.leaf(2.0);
    /// let a = x + 3.0;
    /// let b = a * x;
    /// b.backward();
    /// assert_eq!(x.grad(), 7.0);
    /// assert_eq!(a.grad(), 2.0);
    /// ```
    pub fn backward(&self) {
        backward(self.graph(), self.id(), Traversal::default());
    }

    /// [`Var::backward`] with an explicit rule order.
    pub fn backward_with(&self, traversal: Traversal) {
        backward(self.graph(), self.id(), traversal);
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
