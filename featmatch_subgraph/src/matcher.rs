//! Configured entry point bundling both graphs with their predicates.

use featmatch_common::{Config, DisconnectedPolicy, Graph};
use tracing::{debug, info};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::compat::{AttrEq, EdgeMatcher, NodeMatcher, angular_type_match, node_type_match};
use crate::embedding::EmbeddingSet;
use crate::error::MatchError;
use crate::search::Matches;

/// A pattern, a target, the two compatibility predicates and a [`Config`].
#[derive(Clone, Debug)]
pub struct SubgraphMatcher<'p, 't, NM, EM> {
    pattern: &'p Graph,
    target: &'t Graph,
    node_match: NM,
    edge_match: EM,
    config: Config,
}

impl<'p, 't> SubgraphMatcher<'p, 't, AttrEq, AttrEq> {
    /// Face-adjacency matching: node `type` and edge `angular_type` must be
    /// equal.
    #[must_use]
    pub fn reference(pattern: &'p Graph, target: &'t Graph) -> Self {
        Self::new(pattern, target, node_type_match(), angular_type_match())
    }
}

impl<'p, 't, NM, EM> SubgraphMatcher<'p, 't, NM, EM>
where
    NM: NodeMatcher + Clone,
    EM: EdgeMatcher + Clone,
{
    /// Uses the default configuration.
    pub fn new(pattern: &'p Graph, target: &'t Graph, node_match: NM, edge_match: EM) -> Self {
        Self {
            pattern,
            target,
            node_match,
            edge_match,
            config: Config::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Applies the pre-search checks of the configuration.
    ///
    /// # Errors
    ///
    /// [`MatchError::DisconnectedPattern`] when the pattern has several
    /// components and the policy is [`DisconnectedPolicy::Reject`].
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.config.disconnected == DisconnectedPolicy::Reject {
            let components = self.pattern.connected_components();
            if components > 1 {
                return Err(MatchError::DisconnectedPattern { components });
            }
        }
        Ok(())
    }

    /// A lazy cursor over the embeddings.
    ///
    /// # Errors
    ///
    /// See [`SubgraphMatcher::validate`].
    pub fn matches(&self) -> Result<Matches<'p, 't, NM, EM>, MatchError> {
        self.validate()?;
        Ok(Matches::new(
            self.pattern,
            self.target,
            self.node_match.clone(),
            self.edge_match.clone(),
            self.config.clone(),
        ))
    }

    /// True if at least one embedding exists. Stops at the first one.
    ///
    /// The result cap of the configuration does not apply here.
    ///
    /// # Errors
    ///
    /// See [`SubgraphMatcher::validate`].
    pub fn exists(&self) -> Result<bool, MatchError> {
        self.validate()?;
        let config = Config {
            max_matches: None,
            ..self.config.clone()
        };
        let found = Matches::new(
            self.pattern,
            self.target,
            self.node_match.clone(),
            self.edge_match.clone(),
            config,
        )
        .next()
        .is_some();
        debug!("pattern {} in target", if found { "found" } else { "not found" });
        Ok(found)
    }

    /// Every embedding, in emission order.
    ///
    /// # Errors
    ///
    /// See [`SubgraphMatcher::validate`].
    pub fn find_all(&self) -> Result<EmbeddingSet, MatchError> {
        let set: EmbeddingSet = self.matches()?.collect();
        info!("found {} embeddings", set.len());
        Ok(set)
    }

    /// Number of embeddings.
    ///
    /// # Errors
    ///
    /// See [`SubgraphMatcher::validate`].
    pub fn count(&self) -> Result<usize, MatchError> {
        Ok(self.matches()?.count())
    }
}

#[cfg(feature = "rayon")]
impl<NM, EM> SubgraphMatcher<'_, '_, NM, EM>
where
    NM: NodeMatcher + Clone + Send + Sync,
    EM: EdgeMatcher + Clone + Send + Sync,
{
    /// [`SubgraphMatcher::find_all`] with one task per candidate for the
    /// first pattern node.
    ///
    /// Branches run without deduplication or limit; their results are
    /// concatenated in candidate order and then filtered exactly as the
    /// sequential search would, so the output is identical.
    ///
    /// # Errors
    ///
    /// See [`SubgraphMatcher::validate`].
    pub fn par_find_all(&self) -> Result<EmbeddingSet, MatchError> {
        self.validate()?;
        if self.pattern.is_empty() || self.pattern.node_count() > self.target.node_count() {
            return self.find_all();
        }

        let branch_config = Config {
            dedupe: featmatch_common::Dedupe::None,
            max_matches: None,
            ..self.config.clone()
        };
        let roots: Vec<_> = self.target.indices().collect();
        debug!("splitting search over {} root candidates", roots.len());

        let branches: Vec<Vec<_>> = roots
            .into_par_iter()
            .map(|root| {
                Matches::seeded(
                    self.pattern,
                    self.target,
                    self.node_match.clone(),
                    self.edge_match.clone(),
                    branch_config.clone(),
                    root,
                )
                .collect()
            })
            .collect();

        let mut seen = std::collections::HashSet::new();
        let set: EmbeddingSet = branches
            .into_iter()
            .flatten()
            .filter(|e| {
                self.config.dedupe == featmatch_common::Dedupe::None
                    || seen.insert(e.signature().into_iter().cloned().collect::<Vec<_>>())
            })
            .take(self.config.max_matches.unwrap_or(usize::MAX))
            .collect();
        info!("found {} embeddings", set.len());
        Ok(set)
    }
}
