//! Common types shared across the featmatch workspace.
//!
//! This crate provides the attributed graph model searched by the matcher,
//! the typed attribute values carried on nodes and edges, the error taxonomy,
//! the search configuration, and the JSON graph loader used by the CLI.

mod attrs;
mod config;
mod error;
pub mod graph;
pub mod json;
mod node_id;

pub use crate::attrs::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::graph::{Graph, GraphBuilder};
pub use crate::node_id::*;
