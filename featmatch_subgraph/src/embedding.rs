//! Complete pattern-to-target mappings handed back to callers.

use std::collections::BTreeMap;
use std::fmt;

use featmatch_common::NodeId;
use itertools::Itertools;
use serde::Serialize;

/// One subgraph monomorphism, keyed by pattern node identifier.
///
/// Serializes as a JSON object from pattern id to target id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Embedding {
    pairs: BTreeMap<NodeId, NodeId>,
}

impl Embedding {
    /// Target node assigned to pattern node `pattern`.
    #[must_use]
    pub fn get(&self, pattern: &NodeId) -> Option<&NodeId> {
        self.pairs.get(pattern)
    }

    /// `(pattern, target)` pairs in ascending pattern order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&NodeId, &NodeId)> {
        self.pairs.iter()
    }

    /// Number of mapped pattern nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True for the embedding of the empty pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Target nodes in pattern order.
    pub fn target_nodes(&self) -> impl ExactSizeIterator<Item = &NodeId> {
        self.pairs.values()
    }

    /// The covered target nodes, ascending.
    ///
    /// Two embeddings related by a pattern automorphism have the same
    /// signature.
    #[must_use]
    pub fn signature(&self) -> Vec<&NodeId> {
        self.target_nodes().sorted().collect()
    }
}

impl FromIterator<(NodeId, NodeId)> for Embedding {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Embedding {
    type Item = (&'a NodeId, &'a NodeId);
    type IntoIter = std::collections::btree_map::Iter<'a, NodeId, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl fmt::Display for Embedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.pairs
                .iter()
                .format_with(", ", |(p, t), f| f(&format_args!("{p} -> {t}")))
        )
    }
}

/// All embeddings produced by one exhaustive search, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmbeddingSet {
    /// The embeddings found.
    pub items: Vec<Embedding>,
}

impl EmbeddingSet {
    /// Wraps a list of embeddings.
    #[must_use]
    pub const fn new(items: Vec<Embedding>) -> Self {
        Self { items }
    }

    /// Returns true if no embedding was found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of embeddings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates the embeddings in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Embedding> {
        self.items.iter()
    }
}

impl IntoIterator for EmbeddingSet {
    type Item = Embedding;
    type IntoIter = std::vec::IntoIter<Embedding>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Embedding> for EmbeddingSet {
    fn from_iter<I: IntoIterator<Item = Embedding>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
