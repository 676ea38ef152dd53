//! featmatch command line
//!
//! Loads a feature graph and a workpiece graph from JSON, searches every
//! occurrence of the feature in the workpiece and prints the result.

mod args;
mod report;

use clap::Parser;
use featmatch_common::json::load_graph_from_json;
use tracing::info;

use args::{Args, FormatArg};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    info!("feature: {}, workpiece: {}", args.pattern, args.target);

    let pattern = load_graph_from_json(&args.pattern)?;
    let target = load_graph_from_json(&args.target)?;
    let report = report::run(&args, &pattern, &target)?;

    match args.format {
        FormatArg::Text => print!("{report}"),
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
