//! Loading graphs from their JSON description.
//!
//! The document layout is the one produced by the CAD export:
//!
//! ```json
//! {
//!   "nodes": [[1, {"type": "planar"}], [2, {"type": "cylindrical"}]],
//!   "edges": [[1, 2, {"angular_type": "concave"}]]
//! }
//! ```
//!
//! Each node is an `[id, attributes]` pair and each edge a
//! `[source, target, attributes]` triple. Missing `nodes` or `edges` arrays
//! are treated as empty.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Attrs, Graph, LoadError, NodeId};

/// Serialized form of a [`Graph`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// `[id, attributes]` pairs.
    #[serde(default)]
    pub nodes: Vec<(NodeId, Attrs)>,
    /// `[source, target, attributes]` triples.
    #[serde(default)]
    pub edges: Vec<(NodeId, NodeId, Attrs)>,
}

impl GraphDocument {
    /// Validates the document into a graph.
    ///
    /// # Errors
    ///
    /// [`LoadError::Graph`] if the lists do not describe a simple graph.
    pub fn into_graph(self) -> Result<Graph, LoadError> {
        Ok(Graph::new(self.nodes, self.edges)?)
    }
}

impl From<&Graph> for GraphDocument {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: graph
                .indices()
                .map(|n| (graph.id_at(n).clone(), graph.attrs_at(n).clone()))
                .collect(),
            edges: graph
                .edges()
                .map(|(a, b, attrs)| (a.clone(), b.clone(), attrs.clone()))
                .collect(),
        }
    }
}

/// Parses a graph from JSON text.
///
/// # Errors
///
/// [`LoadError::Json`] for malformed JSON or an unexpected layout,
/// [`LoadError::Graph`] if the content is not a simple graph.
pub fn parse_graph_json(text: &str) -> Result<Graph, LoadError> {
    let document: GraphDocument = serde_json::from_str(text)?;
    document.into_graph()
}

/// Reads and parses a graph from a JSON file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_graph_json`].
pub fn load_graph_from_json(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph_json(&text)?;
    info!(
        "loaded {} ({} nodes, {} edges)",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Renders a graph back into its JSON description.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn to_json_string(graph: &Graph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&GraphDocument::from(graph))
}
