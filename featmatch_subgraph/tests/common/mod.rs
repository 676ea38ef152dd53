#![allow(dead_code)]

use std::sync::Once;

use featmatch_common::{Attrs, Graph};

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a face-adjacency graph: nodes carry `type`, edges `angular_type`.
pub fn face_graph(nodes: &[(i64, &str)], edges: &[(i64, i64, &str)]) -> Graph {
    let mut b = Graph::builder();
    for &(id, kind) in nodes {
        b = b.node(id, Attrs::new().with("type", kind));
    }
    for &(a, c, kind) in edges {
        b = b.edge(a, c, Attrs::new().with("angular_type", kind));
    }
    b.build().expect("test graph is well formed")
}

/// Builds an attribute-free graph on nodes `0..n`.
pub fn plain_graph(n: i64, edges: &[(i64, i64)]) -> Graph {
    let mut b = Graph::builder();
    for i in 0..n {
        b = b.node(i, Attrs::new());
    }
    for &(a, c) in edges {
        b = b.edge(a, c, Attrs::new());
    }
    b.build().expect("test graph is well formed")
}

pub fn cycle(n: i64) -> Graph {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    plain_graph(n, &edges)
}

pub fn complete(n: i64) -> Graph {
    let edges: Vec<_> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();
    plain_graph(n, &edges)
}

pub fn path(n: i64) -> Graph {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    plain_graph(n, &edges)
}

/// Star with center 0 and leaves `1..=leaves`.
pub fn star(leaves: i64) -> Graph {
    let edges: Vec<_> = (1..=leaves).map(|i| (0, i)).collect();
    plain_graph(leaves + 1, &edges)
}

/// The reference triangle: 1:A, 2:A, 3:B with (1,2):X and (1,3),(2,3):Y.
pub fn scenario_pattern() -> Graph {
    face_graph(
        &[(1, "A"), (2, "A"), (3, "B")],
        &[(1, 2, "X"), (1, 3, "Y"), (2, 3, "Y")],
    )
}

/// The reference workpiece: 10:A, 11:A, 12:B, 13:A.
pub fn scenario_target() -> Graph {
    face_graph(
        &[(10, "A"), (11, "A"), (12, "B"), (13, "A")],
        &[(10, 11, "X"), (10, 12, "Y"), (11, 12, "Y"), (11, 13, "X")],
    )
}
