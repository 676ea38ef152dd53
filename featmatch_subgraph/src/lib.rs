//! Attributed subgraph matching.
//!
//! Finds every injective mapping of the nodes of a small *pattern* graph into
//! a larger *target* graph such that compatible nodes land on compatible
//! nodes and every pattern edge lands on a compatible target edge. The target
//! may have extra edges between mapped nodes (monomorphism, not induced
//! isomorphism).
//!
//! ```
//! use featmatch_common::{Attrs, Graph};
//! use featmatch_subgraph::{SubgraphMatcher, exists};
//!
//! let face = |t: &str| Attrs::new().with("type", t);
//! let concave = || Attrs::new().with("angular_type", "concave");
//!
//! let slot = Graph::builder()
//!     .node(1, face("planar"))
//!     .node(2, face("planar"))
//!     .edge(1, 2, concave())
//!     .build()?;
//! let part = Graph::builder()
//!     .node(10, face("planar"))
//!     .node(11, face("planar"))
//!     .node(12, face("cylindrical"))
//!     .edge(10, 11, concave())
//!     .edge(11, 12, concave())
//!     .build()?;
//!
//! let matcher = SubgraphMatcher::reference(&slot, &part);
//! assert!(matcher.exists()?);
//! assert_eq!(matcher.count()?, 2);
//! assert!(exists(&slot, &part, featmatch_subgraph::AnyAttrs, featmatch_subgraph::AnyAttrs));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod candidates;
mod compat;
mod embedding;
mod error;
mod feasibility;
mod matcher;
mod search;
mod state;

pub use featmatch_common::{Config, Dedupe, DisconnectedPolicy, Graph};

pub use crate::compat::*;
pub use crate::embedding::{Embedding, EmbeddingSet};
pub use crate::error::MatchError;
pub use crate::matcher::SubgraphMatcher;
pub use crate::search::Matches;

/// True if the pattern embeds in the target under the default configuration.
/// Stops at the first embedding.
pub fn exists<NM, EM>(pattern: &Graph, target: &Graph, node_match: NM, edge_match: EM) -> bool
where
    NM: NodeMatcher,
    EM: EdgeMatcher,
{
    enumerate(pattern, target, node_match, edge_match)
        .next()
        .is_some()
}

/// Lazy sequence of all embeddings under the default configuration.
pub fn enumerate<'p, 't, NM, EM>(
    pattern: &'p Graph,
    target: &'t Graph,
    node_match: NM,
    edge_match: EM,
) -> Matches<'p, 't, NM, EM>
where
    NM: NodeMatcher,
    EM: EdgeMatcher,
{
    Matches::new(pattern, target, node_match, edge_match, Config::default())
}
