//! Graph nodes and levels.
//!
//! A [`Node`] is the materialization of one inserted vector at one level.
//! Every level a vector reaches gets its own `Node` with its own neighbor
//! list; the vector data itself is shared between them.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::candidate::Candidate;
use crate::distance::euclidean_distance;
use crate::vector::Vector;

/// One inserted vector's presence at one level.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    vector: Arc<Vector>,
    /// Directed out-edges by ID. Entries may outlive the nodes they name.
    neighbors: Vec<String>,
    seq: u64,
}

impl Node {
    pub(crate) fn new(id: String, vector: Arc<Vector>, seq: u64) -> Self {
        Self {
            id,
            vector,
            neighbors: Vec::new(),
            seq,
        }
    }

    /// Key this node was inserted under.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Vector held by this node.
    #[must_use]
    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// IDs of the nearest nodes at this level when the node was inserted,
    /// closest first.
    #[must_use]
    pub fn neighbors(&self) -> &[String] {
        &self.neighbors
    }

    /// Insertion sequence number, used to break distance ties.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub(crate) fn shared_vector(&self) -> &Arc<Vector> {
        &self.vector
    }
}

/// A single level of the graph: node ID to node.
#[derive(Debug, Default)]
pub struct Level {
    nodes: FxHashMap<String, Node>,
}

impl Level {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of nodes at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the level holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns true if a node with this ID is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterates over the nodes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Links `node` to the closest existing nodes of this level and stores it,
    /// replacing any node already stored under the same ID.
    pub(crate) fn insert_linked(&mut self, mut node: Node, max_neighbors: usize) {
        node.neighbors = self
            .ranked(&node.vector.values, Some(node.id.as_str()))
            .into_iter()
            .take(max_neighbors)
            .map(|candidate| candidate.node.id.clone())
            .collect();

        self.nodes.insert(node.id.clone(), node);
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Node> {
        self.nodes.remove(id)
    }

    /// Every node except `exclude`, sorted ascending by distance to `point`.
    pub(crate) fn ranked(&self, point: &[f64], exclude: Option<&str>) -> Vec<Candidate<'_>> {
        let mut candidates: Vec<Candidate<'_>> = self
            .nodes
            .values()
            .filter(|node| exclude != Some(node.id.as_str()))
            .map(|node| Candidate::new(node, euclidean_distance(point, &node.vector.values)))
            .collect();

        // Keys are unique per level, so the order is total and deterministic.
        candidates.sort_unstable();
        candidates
    }
}
