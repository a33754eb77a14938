// src/var/mod.rs

use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use crate::ops::traits::Scalar;
use std::fmt;

mod debug;

/// Handle to a node in a [`Graph`].
///
/// `Var` is `Copy`: it is just a reference to the owning graph plus the
/// node's [`NodeId`]. Arithmetic on handles (`+`, `-`, `*`, [`Var::pow`])
/// appends new nodes to the same graph.
///
/// Equality (`==`) compares forward values only. For identity, e.g. as a key
/// in a set, use [`Var::id`].
pub struct Var<'g, T = f64> {
    graph: &'g Graph<T>,
    id: NodeId,
}

impl<'g, T> Clone for Var<'g, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, T> Copy for Var<'g, T> {}

impl<'g, T: Scalar> Var<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, id: NodeId) -> Self {
        Var { graph, id }
    }

    /// The node's identity within its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this node lives in.
    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    /// Forward value computed when the node was created.
    pub fn value(&self) -> T {
        self.graph.value_of(self.id)
    }

    /// Current content of the gradient accumulator.
    ///
    /// Only meaningful after a backward pass that reached this node.
    pub fn grad(&self) -> T {
        self.graph.grad_of(self.id)
    }

    pub fn op(&self) -> Op<T> {
        self.graph.op_of(self.id)
    }

    /// Operand ids, in operation order.
    pub fn operands(&self) -> Vec<NodeId> {
        self.graph.operands_of(self.id)
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Assign
    }

    /// Snapshot of the node's current state.
    pub fn node(&self) -> Node<T> {
        Node {
            id: self.id,
            value: self.value(),
            grad: self.grad(),
            op: self.op(),
            operands: self.operands(),
        }
    }

    /// Resets this node's gradient to zero. Other nodes are untouched.
    pub fn zero_grad(&self) {
        self.graph.set_grad(self.id, T::zero());
    }

    /// Wraps `value` as a fresh leaf in this node's graph.
    pub(crate) fn wrap(&self, value: T) -> Var<'g, T> {
        self.graph.leaf(value)
    }

    /// Panics if `other` belongs to a different graph.
    pub(crate) fn assert_same_graph(&self, other: &Var<'g, T>) {
        assert!(
            std::ptr::eq(self.graph, other.graph),
            "operands {} and {} belong to different graphs",
            self.id,
            other.id
        );
    }
}

/// Right-hand side of an operation: an existing node or a raw scalar.
///
/// Raw scalars are wrapped as fresh leaf nodes when used as operands of
/// `+ - *`. [`Var::pow`] only accepts the scalar form.
pub enum Operand<'g, T = f64> {
    Node(Var<'g, T>),
    Scalar(T),
}

impl<'g, T: Scalar> Operand<'g, T> {
    /// Human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Node(_) => "node",
            Operand::Scalar(_) => "scalar",
        }
    }
}

impl<'g, T> From<Var<'g, T>> for Operand<'g, T> {
    fn from(var: Var<'g, T>) -> Self {
        Operand::Node(var)
    }
}

macro_rules! impl_operand_from_scalar {
    ($($t:ty),*) => {
        $(
            impl<'g> From<$t> for Operand<'g, $t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

impl_operand_from_scalar!(f32, f64);

impl<'g, T: Scalar> fmt::Debug for Operand<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Node(var) => write!(f, "Operand::Node({:?})", var),
            Operand::Scalar(value) => write!(f, "Operand::Scalar({:?})", value),
        }
    }
}
