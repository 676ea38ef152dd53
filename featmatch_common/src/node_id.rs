//! Node identifiers, external and internal.

use contracts::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External identifier of a node, as supplied by whoever built the graph.
///
/// Integers order before strings. Within a variant the natural order applies,
/// which is the order the matcher uses whenever it has to pick "the minimum"
/// node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Numeric identifier (JSON numbers).
    Int(i64),
    /// Textual identifier (JSON strings).
    Str(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        Self::Int(i64::from(id))
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// Dense index of a node inside one [`crate::Graph`].
///
/// Indices follow ascending [`NodeId`] order, so comparing two indices of the
/// same graph is the same as comparing their identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphNodeIdx {
    /// The underlying raw integer index.
    inner: u32,
}

impl GraphNodeIdx {
    /// Creates a new local graph index from a raw integer.
    #[ensures(ret.inner == id)]
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    #[ensures(ret == self.inner as usize)]
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for GraphNodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.inner)
    }
}

impl From<usize> for GraphNodeIdx {
    #[inline]
    #[debug_requires(u32::try_from(id).is_ok())]
    fn from(id: usize) -> Self {
        Self { inner: id as u32 }
    }
}

impl From<GraphNodeIdx> for usize {
    #[inline]
    fn from(id: GraphNodeIdx) -> Self {
        id.inner as Self
    }
}
