use std::collections::HashMap;

use tracing::debug;

use super::{Graph, edge_key};
use crate::{Attrs, GraphError, GraphNodeIdx, MalformedGraph, NodeId};

/// Largest node count a graph may hold; indices are `u32`.
const MAX_NODES: usize = u32::MAX as usize;

/// Rejects node counts that do not fit the index type.
fn check_node_count(len: usize) -> Result<(), MalformedGraph> {
    if len > MAX_NODES {
        return Err(MalformedGraph::TooManyNodes(len));
    }
    Ok(())
}

/// Collects nodes and edges, then validates them into a [`Graph`].
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<(NodeId, Attrs)>,
    edges: Vec<(NodeId, NodeId, Attrs)>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node.
    #[must_use]
    pub fn node(mut self, id: impl Into<NodeId>, attrs: Attrs) -> Self {
        self.nodes.push((id.into(), attrs));
        self
    }

    /// Declares an undirected edge.
    #[must_use]
    pub fn edge(mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, attrs: Attrs) -> Self {
        self.edges.push((a.into(), b.into(), attrs));
        self
    }

    /// Validates the declarations and freezes them into a graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::Malformed`] if a node is declared twice, an edge names an
    /// undeclared node, an edge is a self-loop, an unordered pair is
    /// declared more than once, or there are more nodes than indices.
    pub fn build(self) -> Result<Graph, GraphError> {
        let Self { mut nodes, edges } = self;
        check_node_count(nodes.len())?;

        nodes.sort_by(|(a, _), (b, _)| a.cmp(b));
        if let Some(pair) = nodes.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(MalformedGraph::DuplicateNode(pair[0].0.clone()).into());
        }

        let (ids, node_attrs): (Vec<NodeId>, Vec<Attrs>) = nodes.into_iter().unzip();
        let index: HashMap<NodeId, GraphNodeIdx> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), GraphNodeIdx::from(i)))
            .collect();

        let mut adjacency: Vec<Vec<GraphNodeIdx>> = vec![Vec::new(); ids.len()];
        let mut edge_attrs = HashMap::with_capacity(edges.len());

        for (a, b, attrs) in edges {
            let lookup = |id: &NodeId| {
                index.get(id).copied().ok_or_else(|| MalformedGraph::DanglingEdge {
                    a: a.clone(),
                    b: b.clone(),
                    missing: id.clone(),
                })
            };
            let ai = lookup(&a)?;
            let bi = lookup(&b)?;

            if ai == bi {
                return Err(MalformedGraph::SelfLoop(a).into());
            }
            if edge_attrs.insert(edge_key(ai, bi), attrs).is_some() {
                return Err(MalformedGraph::DuplicateEdge(a, b).into());
            }
            adjacency[ai.as_usize()].push(bi);
            adjacency[bi.as_usize()].push(ai);
        }

        for nbrs in &mut adjacency {
            nbrs.sort_unstable();
        }

        debug!(
            "built graph with {} nodes and {} edges",
            ids.len(),
            edge_attrs.len()
        );

        Ok(Graph {
            ids,
            index,
            node_attrs,
            adjacency,
            edge_attrs,
        })
    }
}
