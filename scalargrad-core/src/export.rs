// src/export.rs

//! Read-only view of a computation graph for external renderers.
//!
//! [`Var::export`] collects the nodes and edges reachable from a root, in
//! discovery order, together with a label per node. [`GraphExport::to_dot`]
//! turns that into Graphviz DOT text; rendering it is left to the caller.

use crate::autograd::graph::{topological_sort_with_edges, Edge};
use crate::node::{NodeId, Op};
use crate::ops::traits::Scalar;
use crate::var::Var;
use std::fmt;

/// One node of an export, with its rendered label.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportNode<T = f64> {
    pub id: NodeId,
    pub op: Op<T>,
    pub value: T,
    pub grad: T,
    /// `"<op> | <value> | grad <grad>"`, numbers with two decimals.
    pub label: String,
}

/// Nodes and `(operand, dependent)` edges reachable from a root.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphExport<T = f64> {
    pub nodes: Vec<ExportNode<T>>,
    pub edges: Vec<Edge>,
}

impl<T: Scalar> GraphExport<T> {
    /// Renders the export as a top-to-bottom Graphviz digraph.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n  rankdir=TB;\n");
        for node in &self.nodes {
            out.push_str(&format!(
                "  \"{}\" [label=\"{}\"];\n",
                node.id,
                escape(&node.label)
            ));
        }
        for edge in &self.edges {
            out.push_str(&format!("  \"{}\" -> \"{}\";\n", edge.operand, edge.dependent));
        }
        out.push_str("}\n");
        out
    }

    /// Streams the DOT text into `out`.
    pub fn write_dot<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(&self.to_dot())
    }

    pub fn node(&self, id: NodeId) -> Option<&ExportNode<T>> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn label<T: Scalar>(op: &Op<T>, value: T, grad: T) -> String {
    format!("{} | {:.2} | grad {:.2}", op, value, grad)
}

impl<'g, T: Scalar> Var<'g, T> {
    /// Snapshot of the subgraph this node depends on, for visualization.
    ///
    /// Values and gradients are copied at call time; export again after a
    /// backward pass to see the new gradients.
    pub fn export(&self) -> GraphExport<T> {
        let (order, edges) = topological_sort_with_edges(self.graph(), self.id());
        let nodes = order
            .into_iter()
            .filter_map(|id| self.graph().node(id))
            .map(|node| ExportNode {
                id: node.id,
                op: node.op,
                value: node.value,
                grad: node.grad,
                label: label(&node.op, node.value, node.grad),
            })
            .collect();
        GraphExport { nodes, edges }
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
