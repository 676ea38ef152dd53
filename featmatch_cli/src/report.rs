//! Running the search for the command line and rendering its outcome.

use std::fmt;

use featmatch_common::Graph;
use featmatch_subgraph::{AttrsEq, Embedding, MatchError, SubgraphMatcher};
use serde::Serialize;

use crate::args::Args;

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Whether at least one match exists.
    pub is_subgraph: bool,
    /// Absent in `--exists` mode, where the search stops at the first match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Matches in emission order.
    pub matches: Vec<Embedding>,
}

/// Searches `pattern` in `target` as the arguments ask.
pub fn run(args: &Args, pattern: &Graph, target: &Graph) -> Result<Report, MatchError> {
    let matcher = SubgraphMatcher::new(
        pattern,
        target,
        AttrsEq::new(&args.node_keys),
        AttrsEq::new(&args.edge_keys),
    )
    .with_config(args.to_config());

    if args.exists {
        return Ok(Report {
            is_subgraph: matcher.exists()?,
            count: None,
            matches: Vec::new(),
        });
    }

    let found = if args.parallel {
        matcher.par_find_all()?
    } else {
        matcher.find_all()?
    };
    let is_subgraph = !found.is_empty() || matcher.exists()?;
    Ok(Report {
        is_subgraph,
        count: Some(found.len()),
        matches: found.items,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "feature is a subgraph of the workpiece: {}",
            if self.is_subgraph { "yes" } else { "no" }
        )?;
        if let Some(count) = self.count {
            writeln!(f, "matches: {count}")?;
            for (i, m) in self.matches.iter().enumerate() {
                writeln!(f, "  {i}: {m}")?;
            }
        }
        Ok(())
    }
}
