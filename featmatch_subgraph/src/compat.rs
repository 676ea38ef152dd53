//! Node and edge compatibility predicates.
//!
//! The engine never looks at attributes itself; it asks a [`NodeMatcher`]
//! whether a pattern node may sit on a target node and an [`EdgeMatcher`]
//! whether a pattern edge may sit on a target edge. Predicates are pure and
//! total: a missing attribute makes a pair incompatible, it never aborts the
//! search.
//!
//! Any `Fn(&Attrs, &Attrs) -> bool` closure is a matcher on both sides, and
//! the provided matchers also work by reference.

use featmatch_common::{ANGULAR_TYPE_KEY, Attrs, NODE_TYPE_KEY};

/// Decides whether a pattern node may be mapped onto a target node.
pub trait NodeMatcher {
    /// Compares the attribute tables of a pattern node and a target node.
    fn node_matches(&self, pattern: &Attrs, target: &Attrs) -> bool;
}

/// Decides whether a pattern edge may be mapped onto a target edge.
pub trait EdgeMatcher {
    /// Compares the attribute tables of a pattern edge and a target edge.
    fn edge_matches(&self, pattern: &Attrs, target: &Attrs) -> bool;
}

impl<F> NodeMatcher for F
where
    F: Fn(&Attrs, &Attrs) -> bool,
{
    #[inline]
    fn node_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
        self(pattern, target)
    }
}

impl<F> EdgeMatcher for F
where
    F: Fn(&Attrs, &Attrs) -> bool,
{
    #[inline]
    fn edge_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
        self(pattern, target)
    }
}

/// Structure-only matching: every pair is compatible.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyAttrs;

impl NodeMatcher for AnyAttrs {
    #[inline]
    fn node_matches(&self, _pattern: &Attrs, _target: &Attrs) -> bool {
        true
    }
}

impl EdgeMatcher for AnyAttrs {
    #[inline]
    fn edge_matches(&self, _pattern: &Attrs, _target: &Attrs) -> bool {
        true
    }
}

/// Compatible iff both sides carry `key` with equal values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrEq {
    key: String,
}

impl AttrEq {
    /// Compares the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The compared key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn holds(&self, pattern: &Attrs, target: &Attrs) -> bool {
        match (pattern.get(&self.key), target.get(&self.key)) {
            (Some(p), Some(t)) => p == t,
            _ => false,
        }
    }
}

impl NodeMatcher for AttrEq {
    #[inline]
    fn node_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
        self.holds(pattern, target)
    }
}

impl EdgeMatcher for AttrEq {
    #[inline]
    fn edge_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
        self.holds(pattern, target)
    }
}

/// Compatible iff every listed key is present on both sides with equal values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrsEq {
    keys: Vec<AttrEq>,
}

impl AttrsEq {
    /// Compares all of the given keys.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(AttrEq::new).collect(),
        }
    }
}

impl NodeMatcher for AttrsEq {
    fn node_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
        self.keys.iter().all(|k| k.holds(pattern, target))
    }
}

impl EdgeMatcher for AttrsEq {
    fn edge_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
        self.keys.iter().all(|k| k.holds(pattern, target))
    }
}

macro_rules! matcher_by_ref {
    ($($ty:ty),*) => {$(
        impl NodeMatcher for &$ty {
            #[inline]
            fn node_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
                (**self).node_matches(pattern, target)
            }
        }

        impl EdgeMatcher for &$ty {
            #[inline]
            fn edge_matches(&self, pattern: &Attrs, target: &Attrs) -> bool {
                (**self).edge_matches(pattern, target)
            }
        }
    )*};
}

matcher_by_ref!(AnyAttrs, AttrEq, AttrsEq);

/// Reference node predicate: equal `type` attribute.
#[must_use]
pub fn node_type_match() -> AttrEq {
    AttrEq::new(NODE_TYPE_KEY)
}

/// Reference edge predicate: equal `angular_type` attribute.
#[must_use]
pub fn angular_type_match() -> AttrEq {
    AttrEq::new(ANGULAR_TYPE_KEY)
}
