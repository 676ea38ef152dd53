//! Partial mapping between pattern and target nodes.

use contracts::*;
use featmatch_common::{Graph, GraphNodeIdx};

use crate::embedding::Embedding;

/// The evolving injective partial map of the search.
///
/// Besides the forward and reverse maps, each side keeps a frontier tag per
/// node: the mapping depth at which the node first became adjacent to a
/// mapped node, or `0` if it never did. A node is on the frontier when it is
/// tagged and still unmapped. Tagging by depth lets [`MappingState::pop`]
/// restore the previous frontier exactly.
#[derive(Clone, Debug)]
pub(crate) struct MappingState<'p, 't> {
    pattern: &'p Graph,
    target: &'t Graph,
    /// Pattern to target.
    forward: Vec<Option<GraphNodeIdx>>,
    /// Target to pattern.
    reverse: Vec<Option<GraphNodeIdx>>,
    pattern_tag: Vec<usize>,
    target_tag: Vec<usize>,
    depth: usize,
}

impl<'p, 't> MappingState<'p, 't> {
    #[ensures(ret.is_consistent())]
    pub(crate) fn new(pattern: &'p Graph, target: &'t Graph) -> Self {
        Self {
            pattern,
            target,
            forward: vec![None; pattern.node_count()],
            reverse: vec![None; target.node_count()],
            pattern_tag: vec![0; pattern.node_count()],
            target_tag: vec![0; target.node_count()],
            depth: 0,
        }
    }

    pub(crate) const fn pattern(&self) -> &'p Graph {
        self.pattern
    }

    pub(crate) const fn target(&self) -> &'t Graph {
        self.target
    }

    /// Number of mapped pairs.
    pub(crate) const fn len(&self) -> usize {
        self.depth
    }

    /// True once every pattern node has an image.
    pub(crate) fn is_complete(&self) -> bool {
        self.depth == self.forward.len()
    }

    pub(crate) fn image(&self, p: GraphNodeIdx) -> Option<GraphNodeIdx> {
        self.forward[p.as_usize()]
    }

    pub(crate) fn preimage(&self, t: GraphNodeIdx) -> Option<GraphNodeIdx> {
        self.reverse[t.as_usize()]
    }

    pub(crate) fn is_pattern_mapped(&self, p: GraphNodeIdx) -> bool {
        self.image(p).is_some()
    }

    pub(crate) fn is_target_used(&self, t: GraphNodeIdx) -> bool {
        self.preimage(t).is_some()
    }

    pub(crate) fn in_pattern_frontier(&self, p: GraphNodeIdx) -> bool {
        self.pattern_tag[p.as_usize()] != 0 && !self.is_pattern_mapped(p)
    }

    pub(crate) fn in_target_frontier(&self, t: GraphNodeIdx) -> bool {
        self.target_tag[t.as_usize()] != 0 && !self.is_target_used(t)
    }

    /// Unmapped pattern nodes adjacent to the mapping, ascending.
    pub(crate) fn pattern_frontier(&self) -> impl Iterator<Item = GraphNodeIdx> + '_ {
        self.pattern
            .indices()
            .filter(|&p| self.in_pattern_frontier(p))
    }

    /// Unused target nodes adjacent to the mapped images, ascending.
    #[cfg(test)]
    pub(crate) fn target_frontier(&self) -> impl Iterator<Item = GraphNodeIdx> + '_ {
        self.target.indices().filter(|&t| self.in_target_frontier(t))
    }

    pub(crate) fn unmapped_pattern_nodes(&self) -> impl Iterator<Item = GraphNodeIdx> + '_ {
        self.pattern
            .indices()
            .filter(|&p| !self.is_pattern_mapped(p))
    }

    pub(crate) fn unused_target_nodes(&self) -> impl Iterator<Item = GraphNodeIdx> + '_ {
        self.target.indices().filter(|&t| !self.is_target_used(t))
    }

    /// Extends the mapping with `p -> t`.
    #[debug_requires(!self.is_pattern_mapped(p) && !self.is_target_used(t))]
    #[debug_ensures(self.len() == old(self.len()) + 1)]
    #[debug_ensures(self.is_consistent())]
    pub(crate) fn push(&mut self, p: GraphNodeIdx, t: GraphNodeIdx) {
        self.depth += 1;
        self.forward[p.as_usize()] = Some(t);
        self.reverse[t.as_usize()] = Some(p);

        for &n in self.pattern.neighbors_at(p) {
            let tag = &mut self.pattern_tag[n.as_usize()];
            if *tag == 0 {
                *tag = self.depth;
            }
        }
        for &n in self.target.neighbors_at(t) {
            let tag = &mut self.target_tag[n.as_usize()];
            if *tag == 0 {
                *tag = self.depth;
            }
        }
    }

    /// Retracts the most recent pair `p -> t`.
    #[debug_requires(self.image(p) == Some(t))]
    #[debug_ensures(self.len() + 1 == old(self.len()))]
    #[debug_ensures(self.is_consistent())]
    pub(crate) fn pop(&mut self, p: GraphNodeIdx, t: GraphNodeIdx) {
        for &n in self.pattern.neighbors_at(p) {
            let tag = &mut self.pattern_tag[n.as_usize()];
            if *tag == self.depth {
                *tag = 0;
            }
        }
        for &n in self.target.neighbors_at(t) {
            let tag = &mut self.target_tag[n.as_usize()];
            if *tag == self.depth {
                *tag = 0;
            }
        }
        self.forward[p.as_usize()] = None;
        self.reverse[t.as_usize()] = None;
        self.depth -= 1;
    }

    /// Drops every pair.
    #[ensures(self.is_consistent() && self.len() == 0)]
    pub(crate) fn clear(&mut self) {
        self.forward.fill(None);
        self.reverse.fill(None);
        self.pattern_tag.fill(0);
        self.target_tag.fill(0);
        self.depth = 0;
    }

    /// Sorted images of the mapped pattern nodes.
    pub(crate) fn signature(&self) -> Vec<GraphNodeIdx> {
        let mut images: Vec<GraphNodeIdx> = self.forward.iter().flatten().copied().collect();
        images.sort_unstable();
        images
    }

    /// Snapshot of the mapping in identifier space.
    pub(crate) fn to_embedding(&self) -> Embedding {
        self.forward
            .iter()
            .enumerate()
            .filter_map(|(p, t)| {
                t.map(|t| {
                    (
                        self.pattern.id_at(GraphNodeIdx::from(p)).clone(),
                        self.target.id_at(t).clone(),
                    )
                })
            })
            .collect()
    }

    /// Checks that the maps are mutually inverse and that the tagged
    /// frontiers agree with a from-scratch derivation.
    pub(crate) fn is_consistent(&self) -> bool {
        let mapped = self.forward.iter().flatten().count();
        if mapped != self.depth || self.reverse.iter().flatten().count() != self.depth {
            return false;
        }
        let inverse = self.forward.iter().enumerate().all(|(p, t)| {
            t.is_none_or(|t| self.reverse[t.as_usize()] == Some(GraphNodeIdx::from(p)))
        });
        if !inverse {
            return false;
        }

        let pattern_ok = self.pattern.indices().all(|p| {
            let derived = !self.is_pattern_mapped(p)
                && self
                    .pattern
                    .neighbors_at(p)
                    .iter()
                    .any(|&n| self.is_pattern_mapped(n));
            derived == self.in_pattern_frontier(p)
        });
        let target_ok = self.target.indices().all(|t| {
            let derived = !self.is_target_used(t)
                && self
                    .target
                    .neighbors_at(t)
                    .iter()
                    .any(|&n| self.is_target_used(n));
            derived == self.in_target_frontier(t)
        });
        pattern_ok && target_ok
    }
}
