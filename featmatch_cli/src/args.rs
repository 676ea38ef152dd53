use clap::Parser;
use featmatch_common::*;

/// featmatch - find a machining feature inside a workpiece face-adjacency graph
#[derive(Parser, Debug)]
#[command(name = "featmatch")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the feature (pattern) graph JSON
    #[arg(short = 'p', long, default_value = "feature_graph.json")]
    pub pattern: String,

    /// Path to the workpiece (target) graph JSON
    #[arg(short = 't', long, default_value = "workpiece_graph.json")]
    pub target: String,

    /// Node attribute that must be equal on matched nodes (repeatable)
    #[arg(long = "node-key", default_values_t = [NODE_TYPE_KEY.to_string()])]
    pub node_keys: Vec<String>,

    /// Edge attribute that must be equal on matched edges (repeatable)
    #[arg(long = "edge-key", default_values_t = [ANGULAR_TYPE_KEY.to_string()])]
    pub edge_keys: Vec<String>,

    /// How to collapse matches that differ only by a pattern symmetry
    #[arg(long, value_enum, default_value = "none")]
    pub dedupe: DedupeArg,

    /// Stop after this many matches
    #[arg(long)]
    pub limit: Option<usize>,

    /// Only report whether the feature occurs, stopping at the first match
    #[arg(long, default_value_t = false)]
    pub exists: bool,

    /// Whether patterns made of several components are searched or refused
    #[arg(long, value_enum, default_value = "allow")]
    pub disconnected: DisconnectedArg,

    /// Disable the unmapped-neighbor look-ahead prune
    #[arg(long, default_value_t = false)]
    pub no_lookahead: bool,

    /// Split the search over the candidates of the first pattern node
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

impl Args {
    /// Convert command-line arguments into the search configuration
    pub fn to_config(&self) -> Config {
        let builder = Config::builder()
            .dedupe(self.dedupe.into())
            .disconnected(self.disconnected.into())
            .lookahead(!self.no_lookahead);
        match self.limit {
            Some(limit) => builder.max_matches(limit),
            None => builder.unlimited(),
        }
        .build()
    }
}

/// Command-line argument wrapper for Dedupe
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DedupeArg {
    /// Report every match
    #[value(name = "none")]
    None,
    /// One match per set of workpiece faces
    #[value(name = "auto-morph")]
    AutoMorph,
}

impl From<DedupeArg> for Dedupe {
    fn from(arg: DedupeArg) -> Self {
        match arg {
            DedupeArg::None => Dedupe::None,
            DedupeArg::AutoMorph => Dedupe::AutoMorph,
        }
    }
}

/// Command-line argument wrapper for DisconnectedPolicy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisconnectedArg {
    /// Search each component independently
    #[value(name = "allow")]
    Allow,
    /// Refuse the pattern
    #[value(name = "reject")]
    Reject,
}

impl From<DisconnectedArg> for DisconnectedPolicy {
    fn from(arg: DisconnectedArg) -> Self {
        match arg {
            DisconnectedArg::Allow => DisconnectedPolicy::Allow,
            DisconnectedArg::Reject => DisconnectedPolicy::Reject,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Human readable summary
    #[value(name = "text")]
    Text,
    /// A single JSON object
    #[value(name = "json")]
    Json,
}
