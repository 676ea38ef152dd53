use thiserror::Error;

/// Refusals raised before a search starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The pattern has several connected components and the configuration
    /// rejects that.
    #[error("pattern has {components} connected components and disconnected patterns are rejected")]
    DisconnectedPattern {
        /// Number of components found.
        components: usize,
    },
}
