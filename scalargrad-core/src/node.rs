// src/node.rs

use crate::ops::traits::Scalar;
use std::fmt;

/// Stable identity of a node inside its [`Graph`](crate::graph::Graph).
///
/// A `NodeId` is the arena index of the node. It is independent of the node's
/// value, so two nodes holding equal values are still distinct keys in a
/// `HashSet` or `HashMap`. Ids grow with creation order: an operation node
/// always has a larger id than each of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a node was produced.
///
/// The tag doubles as the node's local gradient rule: the backward engine
/// dispatches on it (see [`crate::autograd::backward_op`]) instead of storing
/// a closure per node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// Leaf node: an input or a wrapped constant.
    Assign,
    Add,
    Sub,
    Mul,
    /// Power with a constant exponent.
    Pow(T),
}

impl<T> Op<T> {
    /// Number of operands a node with this operation holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Assign => 0,
            Op::Pow(_) => 1,
            Op::Add | Op::Sub | Op::Mul => 2,
        }
    }

    /// Short tag naming the operation, without the exponent for powers.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Assign => "assign",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Pow(_) => "pow",
        }
    }
}

impl<T: fmt::Display> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow(exponent) => write!(f, "pow {}", exponent),
            other => f.write_str(other.name()),
        }
    }
}

/// Internal storage for one node of the arena.
///
/// `value`, `op` and `operands` are fixed at construction; only `grad`
/// changes afterwards.
#[derive(Debug)]
pub(crate) struct NodeData<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
    pub(crate) operands: Vec<NodeId>,
}

impl<T: Scalar> NodeData<T> {
    pub(crate) fn new(value: T, op: Op<T>, operands: Vec<NodeId>) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "operand count does not match {}", op.name());
        NodeData {
            value,
            grad: T::zero(),
            op,
            operands,
        }
    }
}

/// An owned, read-only snapshot of a node.
///
/// Snapshots do not track later changes: take a new one after `backward`
/// to observe updated gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub id: NodeId,
    pub value: T,
    pub grad: T,
    pub op: Op<T>,
    pub operands: Vec<NodeId>,
}

impl<T> Node<T> {
    /// A leaf has no operands.
    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }

    pub(crate) fn from_data(id: NodeId, data: &NodeData<T>) -> Self
    where
        T: Copy,
    {
        Node {
            id,
            value: data.value,
            grad: data.grad,
            op: data.op,
            operands: data.operands.clone(),
        }
    }
}

impl<T: Scalar> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "op: {} | val: {:.4} | children: {} | grad: {}",
            self.op,
            self.value,
            self.operands.len(),
            self.grad
        )
    }
}
