//! Error types for graph construction, access and loading.
//!
//! All of these are raised before a search starts or by direct misuse of the
//! graph accessors. The search itself cannot fail.

use std::path::PathBuf;

use thiserror::Error;

use crate::NodeId;

/// Errors raised by [`crate::Graph`] construction and accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The node and edge lists do not describe a simple graph.
    #[error("malformed graph: {0}")]
    Malformed(#[from] MalformedGraph),

    /// An accessor was given an identifier that is not a node of the graph.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// An edge accessor was given two nodes that are not adjacent.
    #[error("no edge between {0} and {1}")]
    NoSuchEdge(NodeId, NodeId),
}

/// The ways a node/edge list can fail to form a simple graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedGraph {
    /// An edge endpoint is not among the declared nodes.
    #[error("edge ({a}, {b}) references unknown node {missing}")]
    DanglingEdge {
        /// First endpoint as written.
        a: NodeId,
        /// Second endpoint as written.
        b: NodeId,
        /// The endpoint that is not declared.
        missing: NodeId,
    },

    /// An edge connects a node to itself.
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),

    /// The same unordered pair is declared twice.
    #[error("duplicate edge ({0}, {1})")]
    DuplicateEdge(NodeId, NodeId),

    /// The same node identifier is declared twice.
    #[error("duplicate node {0}")]
    DuplicateNode(NodeId),

    /// More nodes than [`crate::GraphNodeIdx`] can address.
    #[error("{0} nodes exceed the index range")]
    TooManyNodes(usize),
}

/// Errors raised while loading a graph description from JSON.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The text is not a valid graph document.
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but does not describe a simple graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
