mod common;

use std::collections::BTreeSet;

use featmatch_common::{Attrs, Config, Graph, NodeId};
use featmatch_subgraph::{
    Embedding, SubgraphMatcher, angular_type_match, enumerate, node_type_match,
};
use itertools::Itertools;
use quickcheck::{Arbitrary, Gen, quickcheck};

/// A small labelled graph: two node types, two edge types.
#[derive(Clone, Debug)]
struct LabelledGraph {
    node_labels: Vec<bool>,
    edges: Vec<(u8, u8, bool)>,
}

impl LabelledGraph {
    fn build(&self, max_nodes: usize) -> Graph {
        let labels: Vec<bool> = self.node_labels.iter().copied().take(max_nodes).collect();
        let n = labels.len();
        let mut b = Graph::builder();
        for (i, &label) in labels.iter().enumerate() {
            b = b.node(i as i64, Attrs::new().with("type", if label { "A" } else { "B" }));
        }
        if n > 1 {
            let mut seen = BTreeSet::new();
            for &(a, c, label) in &self.edges {
                let (a, c) = (usize::from(a) % n, usize::from(c) % n);
                if a != c && seen.insert((a.min(c), a.max(c))) {
                    b = b.edge(
                        a as i64,
                        c as i64,
                        Attrs::new().with("angular_type", if label { "X" } else { "Y" }),
                    );
                }
            }
        }
        b.build().unwrap()
    }
}

impl Arbitrary for LabelledGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            node_labels: Vec::arbitrary(g),
            edges: Vec::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let edges = self.edges.clone();
        let labels = self.node_labels.clone();
        Box::new(
            self.edges
                .shrink()
                .map(move |edges| Self {
                    node_labels: labels.clone(),
                    edges,
                })
                .chain(self.node_labels.shrink().map(move |node_labels| Self {
                    node_labels,
                    edges: edges.clone(),
                })),
        )
    }
}

const PATTERN_NODES: usize = 4;
const TARGET_NODES: usize = 6;

/// Every injective assignment that satisfies the reference predicates,
/// found by trying all of them.
fn brute_force(pattern: &Graph, target: &Graph) -> BTreeSet<Vec<(NodeId, NodeId)>> {
    let pattern_ids: Vec<NodeId> = pattern.node_ids().cloned().collect();
    let target_ids: Vec<NodeId> = target.node_ids().cloned().collect();
    let same = |a: &Attrs, b: &Attrs, key: &str| match (a.get(key), b.get(key)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    };

    target_ids
        .iter()
        .cloned()
        .permutations(pattern_ids.len())
        .filter(|images| {
            let image_of = |id: &NodeId| {
                let pos = pattern_ids.iter().position(|p| p == id).unwrap();
                &images[pos]
            };
            let nodes_ok = pattern_ids.iter().zip(images).all(|(p, t)| {
                same(
                    pattern.node_attrs(p).unwrap(),
                    target.node_attrs(t).unwrap(),
                    "type",
                )
            });
            nodes_ok
                && pattern.edges().all(|(a, b, attrs)| {
                    target
                        .edge_attrs(image_of(a), image_of(b))
                        .is_ok_and(|t| same(attrs, t, "angular_type"))
                })
        })
        .map(|images| pattern_ids.iter().cloned().zip(images).collect())
        .collect()
}

fn as_pairs(e: &Embedding) -> Vec<(NodeId, NodeId)> {
    e.iter().map(|(p, t)| (p.clone(), t.clone())).collect()
}

quickcheck! {
    fn matches_brute_force(p: LabelledGraph, t: LabelledGraph) -> bool {
        let pattern = p.build(PATTERN_NODES);
        let target = t.build(TARGET_NODES);
        let found: Vec<_> = enumerate(&pattern, &target, node_type_match(), angular_type_match())
            .map(|e| as_pairs(&e))
            .collect();
        let unique: BTreeSet<_> = found.iter().cloned().collect();
        unique.len() == found.len() && unique == brute_force(&pattern, &target)
    }

    fn lookahead_is_only_a_prune(p: LabelledGraph, t: LabelledGraph) -> bool {
        let pattern = p.build(PATTERN_NODES);
        let target = t.build(TARGET_NODES);
        let matcher = SubgraphMatcher::reference(&pattern, &target);
        let with = matcher.find_all().unwrap();
        let without = matcher
            .clone()
            .with_config(Config::builder().lookahead(false).build())
            .find_all()
            .unwrap();
        with == without
    }

    fn auto_morph_covers_every_target_set(p: LabelledGraph, t: LabelledGraph) -> bool {
        let pattern = p.build(PATTERN_NODES);
        let target = t.build(TARGET_NODES);
        let matcher = SubgraphMatcher::reference(&pattern, &target);
        let all = matcher.find_all().unwrap();
        let deduped = matcher
            .clone()
            .with_config(Config::builder().auto_morph().build())
            .find_all()
            .unwrap();

        let expected: BTreeSet<_> = all.iter().map(Embedding::signature).collect();
        let got: Vec<_> = deduped.iter().map(Embedding::signature).collect();
        let got_set: BTreeSet<_> = got.iter().cloned().collect();
        got.len() == got_set.len() && got_set == expected
    }

    fn exists_agrees_with_enumerate(p: LabelledGraph, t: LabelledGraph) -> bool {
        let pattern = p.build(PATTERN_NODES);
        let target = t.build(TARGET_NODES);
        let matcher = SubgraphMatcher::reference(&pattern, &target);
        matcher.exists().unwrap() == (matcher.count().unwrap() > 0)
    }
}

#[cfg(feature = "rayon")]
quickcheck! {
    fn parallel_matches_sequential(p: LabelledGraph, t: LabelledGraph, limit: Option<u8>) -> bool {
        let pattern = p.build(PATTERN_NODES);
        let target = t.build(TARGET_NODES);
        let mut builder = Config::builder().auto_morph();
        if let Some(limit) = limit {
            builder = builder.max_matches(usize::from(limit % 8));
        }
        let matcher = SubgraphMatcher::reference(&pattern, &target).with_config(builder.build());
        matcher.find_all().unwrap() == matcher.par_find_all().unwrap()
    }
}

#[test]
fn scenario_logs_and_matches() {
    common::setup_test_logging();
    let pattern = common::scenario_pattern();
    let target = common::scenario_target();
    let found: BTreeSet<_> = enumerate(&pattern, &target, node_type_match(), angular_type_match())
        .map(|e| as_pairs(&e))
        .collect();
    assert_eq!(found, brute_force(&pattern, &target));
}
