//! Distance-ranked candidate with a total order.
//!
//! Ordering uses `f64::total_cmp` on the distance, then the node's insertion
//! sequence number, so ties resolve the same way on every run regardless of
//! hash table iteration order.

use std::cmp::Ordering;

use super::node::Node;

/// A node paired with its distance to some query point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub(crate) node: &'a Node,
    pub(crate) distance: f64,
}

impl<'a> Candidate<'a> {
    pub(crate) fn new(node: &'a Node, distance: f64) -> Self {
        Self { node, distance }
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.seq().cmp(&other.node.seq()))
    }
}
