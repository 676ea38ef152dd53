//! Attributed undirected simple graph.
//!
//! A [`Graph`] is built once through [`GraphBuilder`] and is read-only
//! afterwards. Nodes are stored densely in ascending [`NodeId`] order, so the
//! matcher can work on [`GraphNodeIdx`] values and still respect identifier
//! order. Two access layers are exposed:
//!
//! - identifier-level accessors (`neighbors`, `degree`, `node_attrs`,
//!   `edge_attrs`) that validate their arguments and report misuse through
//!   [`GraphError`];
//! - index-level accessors (`*_at`) used by the solver on its hot path, which
//!   take indices handed out by this same graph.

mod builder;

use std::collections::{HashMap, VecDeque};

use crate::{Attrs, GraphError, GraphNodeIdx, NodeId};

pub use builder::GraphBuilder;

/// Read-only attributed simple graph.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// Node identifiers in ascending order; position is the dense index.
    ids: Vec<NodeId>,
    /// Identifier to dense index.
    index: HashMap<NodeId, GraphNodeIdx>,
    /// Node attributes by dense index.
    node_attrs: Vec<Attrs>,
    /// Sorted neighbor lists by dense index.
    adjacency: Vec<Vec<GraphNodeIdx>>,
    /// Edge attributes keyed by (smaller, larger) dense index.
    edge_attrs: HashMap<(GraphNodeIdx, GraphNodeIdx), Attrs>,
}

/// Normalizes an unordered pair to (smaller, larger).
#[inline]
fn edge_key(a: GraphNodeIdx, b: GraphNodeIdx) -> (GraphNodeIdx, GraphNodeIdx) {
    if a <= b { (a, b) } else { (b, a) }
}

impl Graph {
    /// Starts building a graph.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Builds a graph from node and edge lists in one go.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] when the lists do not form a simple
    /// graph (see [`GraphBuilder::build`]).
    pub fn new<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = (NodeId, Attrs)>,
        E: IntoIterator<Item = (NodeId, NodeId, Attrs)>,
    {
        let mut builder = GraphBuilder::new();
        for (id, attrs) in nodes {
            builder = builder.node(id, attrs);
        }
        for (a, b, attrs) in edges {
            builder = builder.edge(a, b, attrs);
        }
        builder.build()
    }

    // --- identifier-level API ---

    /// Iterates node identifiers in ascending order.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = &NodeId> + '_ {
        self.ids.iter()
    }

    /// Returns true if `id` is a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_attrs.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the neighbors of `id` in ascending order.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `id` is not a node of this graph.
    pub fn neighbors(
        &self,
        id: &NodeId,
    ) -> Result<impl ExactSizeIterator<Item = &NodeId> + '_, GraphError> {
        let idx = self.require(id)?;
        Ok(self.neighbors_at(idx).iter().map(|&n| self.id_at(n)))
    }

    /// Number of neighbors of `id`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `id` is not a node of this graph.
    pub fn degree(&self, id: &NodeId) -> Result<usize, GraphError> {
        self.require(id).map(|idx| self.degree_at(idx))
    }

    /// Attributes of node `id`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `id` is not a node of this graph.
    pub fn node_attrs(&self, id: &NodeId) -> Result<&Attrs, GraphError> {
        self.require(id).map(|idx| self.attrs_at(idx))
    }

    /// Attributes of edge `{a, b}`; argument order does not matter.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint is unknown, otherwise
    /// [`GraphError::NoSuchEdge`] if the two nodes are not adjacent.
    pub fn edge_attrs(&self, a: &NodeId, b: &NodeId) -> Result<&Attrs, GraphError> {
        let ai = self.require(a)?;
        let bi = self.require(b)?;
        self.edge_attrs_at(ai, bi)
            .ok_or_else(|| GraphError::NoSuchEdge(a.clone(), b.clone()))
    }

    /// Returns true if `{a, b}` is an edge. Unknown identifiers are simply not
    /// adjacent to anything.
    #[must_use]
    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ai), Some(bi)) => self.has_edge_at(ai, bi),
            _ => false,
        }
    }

    /// Iterates every edge once as `(smaller id, larger id, attrs)`, in
    /// ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, &Attrs)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(a, nbrs)| {
            let a = GraphNodeIdx::from(a);
            nbrs.iter()
                .filter(move |&&b| a < b)
                .filter_map(move |&b| {
                    self.edge_attrs
                        .get(&(a, b))
                        .map(|attrs| (self.id_at(a), self.id_at(b), attrs))
                })
        })
    }

    /// Number of connected components. An empty graph has none.
    #[must_use]
    pub fn connected_components(&self) -> usize {
        let mut seen = vec![false; self.node_count()];
        let mut components = 0;
        let mut queue = VecDeque::new();

        for start in 0..self.node_count() {
            if seen[start] {
                continue;
            }
            components += 1;
            seen[start] = true;
            queue.push_back(GraphNodeIdx::from(start));
            while let Some(node) = queue.pop_front() {
                for &n in self.neighbors_at(node) {
                    if !seen[n.as_usize()] {
                        seen[n.as_usize()] = true;
                        queue.push_back(n);
                    }
                }
            }
        }
        components
    }

    // --- index-level API ---

    /// Dense index of `id`, if present.
    #[must_use]
    pub fn index_of(&self, id: &NodeId) -> Option<GraphNodeIdx> {
        self.index.get(id).copied()
    }

    /// Identifier at a dense index.
    #[must_use]
    pub fn id_at(&self, idx: GraphNodeIdx) -> &NodeId {
        &self.ids[idx.as_usize()]
    }

    /// Node attributes at a dense index.
    #[must_use]
    pub fn attrs_at(&self, idx: GraphNodeIdx) -> &Attrs {
        &self.node_attrs[idx.as_usize()]
    }

    /// Sorted neighbor indices of a node.
    #[must_use]
    pub fn neighbors_at(&self, idx: GraphNodeIdx) -> &[GraphNodeIdx] {
        &self.adjacency[idx.as_usize()]
    }

    /// Degree of a node.
    #[must_use]
    pub fn degree_at(&self, idx: GraphNodeIdx) -> usize {
        self.adjacency[idx.as_usize()].len()
    }

    /// Edge attributes between two indices, if adjacent.
    #[must_use]
    pub fn edge_attrs_at(&self, a: GraphNodeIdx, b: GraphNodeIdx) -> Option<&Attrs> {
        self.edge_attrs.get(&edge_key(a, b))
    }

    /// Returns true if the two indices are adjacent.
    #[must_use]
    pub fn has_edge_at(&self, a: GraphNodeIdx, b: GraphNodeIdx) -> bool {
        self.edge_attrs.contains_key(&edge_key(a, b))
    }

    /// Iterates all dense indices in ascending order.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = GraphNodeIdx> + use<> {
        (0..self.ids.len()).map(GraphNodeIdx::from)
    }

    fn require(&self, id: &NodeId) -> Result<GraphNodeIdx, GraphError> {
        self.index_of(id)
            .ok_or_else(|| GraphError::UnknownNode(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MalformedGraph;

    fn typed(t: &str) -> Attrs {
        Attrs::new().with("type", t)
    }

    fn path_graph() -> Graph {
        Graph::builder()
            .node(3, typed("C"))
            .node(1, typed("A"))
            .node(2, typed("B"))
            .edge(2, 1, Attrs::new().with("angular_type", "X"))
            .edge(2, 3, Attrs::new().with("angular_type", "Y"))
            .build()
            .unwrap()
    }

    #[test]
    fn nodes_are_sorted_by_identifier() {
        let g = path_graph();
        let ids: Vec<_> = g.node_ids().cloned().collect();
        assert_eq!(ids, vec![NodeId::from(1), NodeId::from(2), NodeId::from(3)]);
        assert_eq!(g.index_of(&NodeId::from(2)), Some(GraphNodeIdx::new(1)));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = path_graph();
        let n2: Vec<_> = g.neighbors(&NodeId::from(2)).unwrap().cloned().collect();
        assert_eq!(n2, vec![NodeId::from(1), NodeId::from(3)]);
        assert_eq!(g.degree(&NodeId::from(1)).unwrap(), 1);
        assert!(g.has_edge(&NodeId::from(1), &NodeId::from(2)));
        assert!(g.has_edge(&NodeId::from(2), &NodeId::from(1)));
        assert!(!g.has_edge(&NodeId::from(1), &NodeId::from(3)));
        assert_eq!(
            g.edge_attrs(&NodeId::from(3), &NodeId::from(2)).unwrap(),
            &Attrs::new().with("angular_type", "Y")
        );
    }

    #[test]
    fn accessor_misuse_is_reported() {
        let g = path_graph();
        assert_eq!(
            g.neighbors(&NodeId::from(9)).err(),
            Some(GraphError::UnknownNode(NodeId::from(9)))
        );
        assert_eq!(
            g.node_attrs(&NodeId::from("x")).err(),
            Some(GraphError::UnknownNode(NodeId::from("x")))
        );
        assert_eq!(
            g.edge_attrs(&NodeId::from(1), &NodeId::from(3)).err(),
            Some(GraphError::NoSuchEdge(NodeId::from(1), NodeId::from(3)))
        );
        assert_eq!(
            g.edge_attrs(&NodeId::from(1), &NodeId::from(7)).err(),
            Some(GraphError::UnknownNode(NodeId::from(7)))
        );
    }

    #[test]
    fn construction_rejects_non_simple_graphs() {
        let dangling = Graph::builder().node(1, Attrs::new()).edge(1, 2, Attrs::new()).build();
        assert_eq!(
            dangling.err(),
            Some(GraphError::Malformed(MalformedGraph::DanglingEdge {
                a: NodeId::from(1),
                b: NodeId::from(2),
                missing: NodeId::from(2),
            }))
        );

        let looped = Graph::builder().node(1, Attrs::new()).edge(1, 1, Attrs::new()).build();
        assert_eq!(
            looped.err(),
            Some(GraphError::Malformed(MalformedGraph::SelfLoop(NodeId::from(1))))
        );

        let doubled = Graph::builder()
            .node(1, Attrs::new())
            .node(2, Attrs::new())
            .edge(1, 2, Attrs::new())
            .edge(2, 1, Attrs::new())
            .build();
        assert_eq!(
            doubled.err(),
            Some(GraphError::Malformed(MalformedGraph::DuplicateEdge(
                NodeId::from(2),
                NodeId::from(1)
            )))
        );

        let twice = Graph::builder().node(1, Attrs::new()).node(1, Attrs::new()).build();
        assert_eq!(
            twice.err(),
            Some(GraphError::Malformed(MalformedGraph::DuplicateNode(NodeId::from(1))))
        );
    }

    #[test]
    fn edges_and_components() {
        let g = Graph::builder()
            .node(1, Attrs::new())
            .node(2, Attrs::new())
            .node(3, Attrs::new())
            .node(4, Attrs::new())
            .edge(3, 4, Attrs::new())
            .edge(1, 2, Attrs::new())
            .build()
            .unwrap();
        let edges: Vec<_> = g.edges().map(|(a, b, _)| (a.clone(), b.clone())).collect();
        assert_eq!(
            edges,
            vec![
                (NodeId::from(1), NodeId::from(2)),
                (NodeId::from(3), NodeId::from(4)),
            ]
        );
        assert_eq!(g.connected_components(), 2);
        assert_eq!(Graph::default().connected_components(), 0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, quickcheck};

    /// Random simple graph description: node count plus a deduplicated edge list.
    #[derive(Clone, Debug)]
    struct ArbitraryEdgeList {
        nodes: i64,
        edges: Vec<(i64, i64)>,
    }

    impl Arbitrary for ArbitraryEdgeList {
        fn arbitrary(g: &mut Gen) -> Self {
            let nodes = i64::from(u8::arbitrary(g) % 12) + 1;
            let mut edges = Vec::new();
            for _ in 0..usize::arbitrary(g) % 30 {
                let a = i64::from(u8::arbitrary(g)) % nodes;
                let b = i64::from(u8::arbitrary(g)) % nodes;
                let key = (a.min(b), a.max(b));
                if a != b && !edges.contains(&key) {
                    edges.push(key);
                }
            }
            Self { nodes, edges }
        }
    }

    impl ArbitraryEdgeList {
        fn build(&self) -> Graph {
            Graph::new(
                (0..self.nodes).map(|n| (NodeId::from(n), Attrs::new())),
                self.edges
                    .iter()
                    .map(|&(a, b)| (NodeId::from(b), NodeId::from(a), Attrs::new())),
            )
            .unwrap()
        }
    }

    quickcheck! {
        fn prop_neighbors_are_symmetric(desc: ArbitraryEdgeList) -> bool {
            let g = desc.build();
            g.indices().all(|a| {
                g.neighbors_at(a)
                    .iter()
                    .all(|&b| g.neighbors_at(b).contains(&a) && g.has_edge_at(b, a))
            })
        }

        fn prop_degree_sum_is_twice_edge_count(desc: ArbitraryEdgeList) -> bool {
            let g = desc.build();
            let total: usize = g.indices().map(|n| g.degree_at(n)).sum();
            total == 2 * g.edge_count() && g.edge_count() == desc.edges.len()
        }
    }
}
