//! Feasibility of extending the mapping by one pair.
//!
//! Checks run cheapest first and stop at the first failure:
//!
//! 1. the target node is not already used,
//! 2. the node predicate accepts the pair,
//! 3. every mapped pattern neighbor has its image adjacent to the target
//!    node, through an edge accepted by the edge predicate,
//! 4. (optional) the target node has at least as many unused neighbors as the
//!    pattern node has unmapped ones.
//!
//! Extra target edges between mapped images are never a reason to reject:
//! the search finds monomorphisms, not induced subgraphs.

use featmatch_common::GraphNodeIdx;
use tracing::{instrument, trace};

use crate::compat::{EdgeMatcher, NodeMatcher};
use crate::state::MappingState;

/// Why a pair was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    TargetUsed,
    NodeAttrs,
    MissingEdge(GraphNodeIdx),
    EdgeAttrs(GraphNodeIdx),
    Lookahead,
}

/// Runs the checks for `p -> t`.
#[instrument(level = "trace", skip_all, fields(p = %p, t = %t))]
pub(crate) fn check<NM, EM>(
    state: &MappingState<'_, '_>,
    p: GraphNodeIdx,
    t: GraphNodeIdx,
    node_match: &NM,
    edge_match: &EM,
    lookahead: bool,
) -> Result<(), Rejection>
where
    NM: NodeMatcher + ?Sized,
    EM: EdgeMatcher + ?Sized,
{
    let pattern = state.pattern();
    let target = state.target();

    if state.is_target_used(t) {
        return Err(Rejection::TargetUsed);
    }
    if !node_match.node_matches(pattern.attrs_at(p), target.attrs_at(t)) {
        return Err(Rejection::NodeAttrs);
    }

    let mut unmapped = 0usize;
    for &n in pattern.neighbors_at(p) {
        let Some(image) = state.image(n) else {
            unmapped += 1;
            continue;
        };
        let Some(target_edge) = target.edge_attrs_at(image, t) else {
            return Err(Rejection::MissingEdge(n));
        };
        let pattern_edge = pattern.edge_attrs_at(p, n).ok_or(Rejection::MissingEdge(n))?;
        if !edge_match.edge_matches(pattern_edge, target_edge) {
            return Err(Rejection::EdgeAttrs(n));
        }
    }

    if lookahead {
        let unused = target
            .neighbors_at(t)
            .iter()
            .filter(|&&n| !state.is_target_used(n))
            .count();
        if unmapped > unused {
            return Err(Rejection::Lookahead);
        }
    }
    Ok(())
}

/// True if `p -> t` passes every check.
pub(crate) fn is_feasible<NM, EM>(
    state: &MappingState<'_, '_>,
    p: GraphNodeIdx,
    t: GraphNodeIdx,
    node_match: &NM,
    edge_match: &EM,
    lookahead: bool,
) -> bool
where
    NM: NodeMatcher + ?Sized,
    EM: EdgeMatcher + ?Sized,
{
    match check(state, p, t, node_match, edge_match, lookahead) {
        Ok(()) => true,
        Err(reason) => {
            trace!("rejected {p} -> {t}: {reason:?}");
            false
        }
    }
}
