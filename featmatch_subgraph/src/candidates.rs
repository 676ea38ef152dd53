//! Choice of the next pattern node and its ordered target candidates.

use featmatch_common::GraphNodeIdx;
use tracing::instrument;

use crate::state::MappingState;

/// The pattern node to extend next, with the target nodes to try for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Extension {
    pub(crate) pattern: GraphNodeIdx,
    pub(crate) candidates: Vec<GraphNodeIdx>,
}

/// Smallest pattern node on the frontier, or the smallest unmapped one when
/// the frontier is empty (first pick, or a new component of the pattern).
pub(crate) fn next_pattern_node(state: &MappingState<'_, '_>) -> Option<GraphNodeIdx> {
    state
        .pattern_frontier()
        .next()
        .or_else(|| state.unmapped_pattern_nodes().next())
}

/// Unused target nodes adjacent to the image of every mapped neighbor of
/// `p`, ascending. Without mapped neighbors every unused target node is a
/// candidate.
pub(crate) fn candidate_targets(
    state: &MappingState<'_, '_>,
    p: GraphNodeIdx,
) -> Vec<GraphNodeIdx> {
    let target = state.target();
    let images: Vec<GraphNodeIdx> = state
        .pattern()
        .neighbors_at(p)
        .iter()
        .filter_map(|&n| state.image(n))
        .collect();

    let Some(&anchor) = images.iter().min_by_key(|&&t| target.degree_at(t)) else {
        return state.unused_target_nodes().collect();
    };

    target
        .neighbors_at(anchor)
        .iter()
        .copied()
        .filter(|&t| !state.is_target_used(t))
        .filter(|&t| {
            images
                .iter()
                .all(|&img| img == anchor || target.has_edge_at(img, t))
        })
        .collect()
}

/// Picks the next extension, or `None` once the mapping is complete.
#[instrument(level = "trace", skip_all, fields(depth = state.len()))]
pub(crate) fn select(state: &MappingState<'_, '_>) -> Option<Extension> {
    let pattern = next_pattern_node(state)?;
    Some(Extension {
        pattern,
        candidates: candidate_targets(state, pattern),
    })
}
