//! Lazy backtracking enumeration of embeddings.
//!
//! The search is an explicit stack of levels instead of recursion. Each
//! level owns the ordered candidate list for one pattern node, a cursor into
//! it, and the target node currently committed for it. [`Matches::next`]
//! drives the stack until the mapping is complete (an embedding is emitted)
//! or the root level runs out of candidates (the search is exhausted). The
//! mapping is left in place between calls, so the caller can stop pulling at
//! any time and nothing is computed past the last embedding it asked for.

use std::collections::HashSet;
use std::iter::FusedIterator;

use featmatch_common::{Config, Dedupe, Graph, GraphNodeIdx};
use tracing::{debug, info, instrument};

use crate::candidates;
use crate::compat::{EdgeMatcher, NodeMatcher};
use crate::embedding::Embedding;
use crate::feasibility;
use crate::state::MappingState;

/// One frame of the explicit search stack.
#[derive(Clone, Debug)]
struct Level {
    pattern: GraphNodeIdx,
    candidates: Vec<GraphNodeIdx>,
    cursor: usize,
    committed: Option<GraphNodeIdx>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Push a level for the next pattern node.
    Select,
    /// Undo the committed pair of the top level, then commit its next
    /// feasible candidate.
    Try,
    Exhausted,
}

/// Iterator over the embeddings of a pattern in a target.
///
/// Embeddings come out in a deterministic order: pattern nodes are extended
/// in ascending frontier order and candidates are tried in ascending target
/// order.
pub struct Matches<'p, 't, NM, EM> {
    state: MappingState<'p, 't>,
    stack: Vec<Level>,
    phase: Phase,
    node_match: NM,
    edge_match: EM,
    config: Config,
    /// Restricts the root level to a single target node.
    root: Option<GraphNodeIdx>,
    seen: HashSet<Vec<GraphNodeIdx>>,
    emitted: usize,
}

impl<'p, 't, NM, EM> Matches<'p, 't, NM, EM>
where
    NM: NodeMatcher,
    EM: EdgeMatcher,
{
    /// Prepares a search. Nothing is explored until the first call to
    /// [`Iterator::next`].
    pub fn new(
        pattern: &'p Graph,
        target: &'t Graph,
        node_match: NM,
        edge_match: EM,
        config: Config,
    ) -> Self {
        info!(
            "searching pattern ({} nodes, {} edges) in target ({} nodes, {} edges)",
            pattern.node_count(),
            pattern.edge_count(),
            target.node_count(),
            target.edge_count()
        );
        Self::build(pattern, target, node_match, edge_match, config, None)
    }

    /// A search whose first pattern node may only land on `root`.
    pub(crate) fn seeded(
        pattern: &'p Graph,
        target: &'t Graph,
        node_match: NM,
        edge_match: EM,
        config: Config,
        root: GraphNodeIdx,
    ) -> Self {
        Self::build(pattern, target, node_match, edge_match, config, Some(root))
    }

    fn build(
        pattern: &'p Graph,
        target: &'t Graph,
        node_match: NM,
        edge_match: EM,
        config: Config,
        root: Option<GraphNodeIdx>,
    ) -> Self {
        let mut matches = Self {
            state: MappingState::new(pattern, target),
            stack: Vec::with_capacity(pattern.node_count()),
            phase: Phase::Select,
            node_match,
            edge_match,
            config,
            root,
            seen: HashSet::new(),
            emitted: 0,
        };
        matches.phase = matches.initial_phase();
        matches
    }

    /// Forgets all progress; the next call to [`Iterator::next`] starts over
    /// and yields the same sequence again.
    pub fn reset(&mut self) {
        self.state.clear();
        self.stack.clear();
        self.seen.clear();
        self.emitted = 0;
        self.phase = self.initial_phase();
    }

    /// The configuration this search runs with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn initial_phase(&self) -> Phase {
        if self.state.pattern().node_count() > self.state.target().node_count() {
            debug!("pattern is larger than target, nothing to enumerate");
            Phase::Exhausted
        } else {
            Phase::Select
        }
    }

    /// Runs the state machine to the next complete mapping. Returns false
    /// once the search space is exhausted.
    #[instrument(level = "trace", skip_all, fields(emitted = self.emitted))]
    fn advance(&mut self) -> bool {
        loop {
            match self.phase {
                Phase::Exhausted => return false,
                Phase::Select => {
                    if self.state.is_complete() {
                        // only the empty pattern is complete before any level
                        self.phase = Phase::Exhausted;
                        return true;
                    }
                    let Some(ext) = candidates::select(&self.state) else {
                        self.phase = Phase::Exhausted;
                        return false;
                    };
                    let candidates = match self.root {
                        Some(root) if self.stack.is_empty() => {
                            ext.candidates.into_iter().filter(|&t| t == root).collect()
                        }
                        _ => ext.candidates,
                    };
                    self.stack.push(Level {
                        pattern: ext.pattern,
                        candidates,
                        cursor: 0,
                        committed: None,
                    });
                    self.phase = Phase::Try;
                }
                Phase::Try => {
                    let Some(level) = self.stack.last_mut() else {
                        debug!("search exhausted after {} embeddings", self.emitted);
                        self.phase = Phase::Exhausted;
                        return false;
                    };
                    if let Some(t) = level.committed.take() {
                        self.state.pop(level.pattern, t);
                    }

                    let mut committed = None;
                    while let Some(&t) = level.candidates.get(level.cursor) {
                        level.cursor += 1;
                        if feasibility::is_feasible(
                            &self.state,
                            level.pattern,
                            t,
                            &self.node_match,
                            &self.edge_match,
                            self.config.lookahead,
                        ) {
                            committed = Some(t);
                            break;
                        }
                    }

                    let Some(t) = committed else {
                        // this level is done, the parent moves to its next candidate
                        self.stack.pop();
                        continue;
                    };
                    self.state.push(level.pattern, t);
                    level.committed = Some(t);

                    if self.state.is_complete() {
                        return true;
                    }
                    self.phase = Phase::Select;
                }
            }
        }
    }

    fn limit_reached(&self) -> bool {
        self.config
            .max_matches
            .is_some_and(|limit| self.emitted >= limit)
    }
}

impl<NM, EM> Iterator for Matches<'_, '_, NM, EM>
where
    NM: NodeMatcher,
    EM: EdgeMatcher,
{
    type Item = Embedding;

    fn next(&mut self) -> Option<Embedding> {
        loop {
            if self.limit_reached() {
                return None;
            }
            if !self.advance() {
                return None;
            }
            if self.config.dedupe == Dedupe::AutoMorph && !self.seen.insert(self.state.signature()) {
                continue;
            }
            self.emitted += 1;
            let embedding = self.state.to_embedding();
            debug!("embedding #{}: {embedding}", self.emitted);
            return Some(embedding);
        }
    }
}

impl<NM, EM> FusedIterator for Matches<'_, '_, NM, EM>
where
    NM: NodeMatcher,
    EM: EdgeMatcher,
{
}

#[cfg(test)]
mod tests {
    use featmatch_common::Attrs;

    use super::*;
    use crate::compat::AnyAttrs;

    fn complete(n: i64) -> Graph {
        let mut b = Graph::builder();
        for i in 0..n {
            b = b.node(i, Attrs::new());
        }
        for i in 0..n {
            for j in (i + 1)..n {
                b = b.edge(i, j, Attrs::new());
            }
        }
        b.build().unwrap()
    }

    fn search<'a>(p: &'a Graph, t: &'a Graph, config: Config) -> Matches<'a, 'a, AnyAttrs, AnyAttrs> {
        Matches::new(p, t, AnyAttrs, AnyAttrs, config)
    }

    #[test]
    fn empty_pattern_has_one_embedding() {
        let empty = Graph::builder().build().unwrap();
        let t = complete(3);
        let all: Vec<_> = search(&empty, &t, Config::default()).collect();
        assert_eq!(all, vec![Embedding::default()]);

        let on_empty: Vec<_> = search(&empty, &empty, Config::default()).collect();
        assert_eq!(on_empty.len(), 1);
    }

    #[test]
    fn larger_pattern_has_none() {
        let p = complete(4);
        let t = complete(3);
        assert_eq!(search(&p, &t, Config::default()).count(), 0);
    }

    #[test]
    fn triangle_in_triangle_is_ordered() {
        let k3 = complete(3);
        let all: Vec<String> = search(&k3, &k3, Config::default())
            .map(|e| e.to_string())
            .collect();
        assert_eq!(
            all,
            vec![
                "{0 -> 0, 1 -> 1, 2 -> 2}",
                "{0 -> 0, 1 -> 2, 2 -> 1}",
                "{0 -> 1, 1 -> 0, 2 -> 2}",
                "{0 -> 1, 1 -> 2, 2 -> 0}",
                "{0 -> 2, 1 -> 0, 2 -> 1}",
                "{0 -> 2, 1 -> 1, 2 -> 0}",
            ]
        );
    }

    #[test]
    fn fused_after_exhaustion() {
        let k2 = complete(2);
        let mut it = search(&k2, &k2, Config::default());
        assert_eq!(it.by_ref().count(), 2);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn reset_replays_the_sequence() {
        let k3 = complete(3);
        let k4 = complete(4);
        let mut it = search(&k3, &k4, Config::default());
        let first: Vec<_> = it.by_ref().take(5).collect();
        it.reset();
        let again: Vec<_> = it.by_ref().take(5).collect();
        assert_eq!(first, again);
        assert_eq!(it.count(), 24 - 5);
    }

    #[test]
    fn limit_and_dedupe() {
        let k3 = complete(3);
        let k4 = complete(4);
        let limited = Config::builder().max_matches(7).build();
        assert_eq!(search(&k3, &k4, limited).count(), 7);

        let deduped = Config::builder().auto_morph().build();
        assert_eq!(search(&k3, &k4, deduped).count(), 4);
    }

    #[test]
    fn root_restricts_first_level() {
        let k2 = complete(2);
        let k3 = complete(3);
        let seeded: Vec<_> = Matches::seeded(
            &k2,
            &k3,
            AnyAttrs,
            AnyAttrs,
            Config::default(),
            GraphNodeIdx::from(1),
        )
        .collect();
        assert_eq!(seeded.len(), 2);
        assert!(seeded.iter().all(|e| e.get(&0.into()) == Some(&1.into())));
    }
}
