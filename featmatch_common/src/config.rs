//! Configuration for the subgraph search.
//!
//! This module exposes a small, stable surface for consumers (the
//! `featmatch_subgraph` engine and the CLI) to parameterize how matching
//! should behave. Every knob has a default that reproduces plain exhaustive
//! enumeration:
//!
//! ```
//! use featmatch_common::{Config, Dedupe, DisconnectedPolicy};
//!
//! let cfg = Config::default();
//! assert_eq!(cfg.dedupe, Dedupe::None);
//! assert_eq!(cfg.max_matches, None);
//! assert_eq!(cfg.disconnected, DisconnectedPolicy::Allow);
//! assert!(cfg.lookahead);
//!
//! // Collapse automorphic duplicates, keep at most ten.
//! let cfg = Config::builder().auto_morph().max_matches(10).build();
//! assert_eq!(cfg.dedupe, Dedupe::AutoMorph);
//! ```

/// How emitted embeddings are deduplicated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dedupe {
    /// Keep every embedding, including those that differ only by a pattern
    /// automorphism.
    #[default]
    None,
    /// Keep only the first embedding for each distinct set of target nodes.
    AutoMorph,
}

/// What to do with patterns made of several connected components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisconnectedPolicy {
    /// Search them; components are placed independently.
    #[default]
    Allow,
    /// Refuse them before searching.
    Reject,
}

/// Global search configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Deduplication of results.
    pub dedupe: Dedupe,
    /// Stop after this many results.
    pub max_matches: Option<usize>,
    /// Handling of disconnected patterns.
    pub disconnected: DisconnectedPolicy,
    /// Whether to apply the unmapped-neighbor look-ahead prune.
    pub lookahead: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dedupe: Dedupe::None,
            max_matches: None,
            disconnected: DisconnectedPolicy::Allow,
            lookahead: true,
        }
    }
}

impl Config {
    /// Starts a builder from the default configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Fluent builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the deduplication mode.
    #[must_use]
    pub const fn dedupe(mut self, dedupe: Dedupe) -> Self {
        self.config.dedupe = dedupe;
        self
    }

    /// Keep every embedding.
    #[must_use]
    pub const fn none(self) -> Self {
        self.dedupe(Dedupe::None)
    }

    /// Collapse embeddings covering the same target nodes.
    #[must_use]
    pub const fn auto_morph(self) -> Self {
        self.dedupe(Dedupe::AutoMorph)
    }

    /// Caps the number of results.
    #[must_use]
    pub const fn max_matches(mut self, limit: usize) -> Self {
        self.config.max_matches = Some(limit);
        self
    }

    /// Removes any result cap.
    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.config.max_matches = None;
        self
    }

    /// Sets the disconnected-pattern policy.
    #[must_use]
    pub const fn disconnected(mut self, policy: DisconnectedPolicy) -> Self {
        self.config.disconnected = policy;
        self
    }

    /// Refuse patterns with more than one connected component.
    #[must_use]
    pub const fn reject_disconnected(self) -> Self {
        self.disconnected(DisconnectedPolicy::Reject)
    }

    /// Enables or disables the look-ahead prune.
    #[must_use]
    pub const fn lookahead(mut self, enabled: bool) -> Self {
        self.config.lookahead = enabled;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
