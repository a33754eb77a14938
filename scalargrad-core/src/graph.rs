// src/graph.rs

use crate::node::{Node, NodeData, NodeId, Op};
use crate::ops::traits::Scalar;
use crate::var::Var;
use std::cell::RefCell;
use std::fmt;

/// Arena owning every node of a computation graph.
///
/// Nodes reference their operands by [`NodeId`] (an index into the arena), so
/// the graph holds no pointers and is torn down in one piece when the `Graph`
/// is dropped. Nodes are only ever appended, which keeps the operand relation
/// acyclic: an operand always exists before the node that uses it.
///
/// `Graph` uses a `RefCell` internally so that [`Var`] handles can build new
/// nodes and accumulate gradients through a shared `&Graph`. It is
/// single-threaded by construction (`!Sync`).
pub struct Graph<T = f64> {
    pub(crate) nodes: RefCell<Vec<NodeData<T>>>,
}

impl Graph<f64> {
    /// Creates an empty `f64` graph.
    ///
    /// For other element types use `Graph::<f32>::default()` or
    /// [`Graph::with_capacity`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Scalar> Graph<T> {
    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Creates a leaf node (`Op::Assign`, no operands, zero gradient).
    pub fn leaf(&self, value: T) -> Var<'_, T> {
        let id = self.push(value, Op::Assign, Vec::new());
        Var::new(self, id)
    }

    /// Returns a handle to an existing node, or `None` if `id` is not part of
    /// this graph.
    pub fn var(&self, id: NodeId) -> Option<Var<'_, T>> {
        if id.0 < self.len() {
            Some(Var::new(self, id))
        } else {
            None
        }
    }

    /// Returns a snapshot of the node `id`.
    pub fn node(&self, id: NodeId) -> Option<Node<T>> {
        self.nodes
            .borrow()
            .get(id.0)
            .map(|data| Node::from_data(id, data))
    }

    /// Returns snapshots of all nodes in creation order.
    pub fn nodes(&self) -> Vec<Node<T>> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .map(|(i, data)| Node::from_data(NodeId(i), data))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every node in the graph to zero.
    ///
    /// Gradients are never cleared automatically; call this (or build a fresh
    /// graph) between backward passes that should not accumulate.
    pub fn zero_grad(&self) {
        for data in self.nodes.borrow_mut().iter_mut() {
            data.grad = T::zero();
        }
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&self, value: T, op: Op<T>, operands: Vec<NodeId>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData::new(value, op, operands));
        log::trace!("graph: created node {} ({})", id, op);
        id
    }

    pub(crate) fn value_of(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.0].value
    }

    pub(crate) fn grad_of(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.0].grad
    }

    pub(crate) fn set_grad(&self, id: NodeId, grad: T) {
        self.nodes.borrow_mut()[id.0].grad = grad;
    }

    pub(crate) fn op_of(&self, id: NodeId) -> Op<T> {
        self.nodes.borrow()[id.0].op
    }

    pub(crate) fn operands_of(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[id.0].operands.clone()
    }
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Scalar> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nodes.try_borrow() {
            Ok(nodes) => write!(f, "Graph(len={})", nodes.len()),
            Err(_) => write!(f, "Graph(<borrowed>)"),
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
