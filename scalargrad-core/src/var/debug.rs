// src/var/debug.rs
use crate::ops::traits::Scalar;
use crate::var::Var;
use std::fmt;

// Both impls print the node summary (op tag, value, operand count, grad).
impl<'g, T: Scalar> fmt::Debug for Var<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph().nodes.try_borrow() {
            Ok(_) => write!(f, "{}", self.node()),
            Err(_) => write!(f, "Var(id={}, <graph borrowed>)", self.id()),
        }
    }
}

impl<'g, T: Scalar> fmt::Display for Var<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
