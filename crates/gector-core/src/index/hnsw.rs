//! Multi-level graph index.
//!
//! # Layout
//!
//! ```text
//! level 0                 (top, sparsest)
//! level 1
//! ...
//! level max_levels - 1    (bottom, every node)
//! ```
//!
//! A new vector always lands on the bottom level and climbs one level per
//! successful promotion trial. At each level it reaches, it is linked to the
//! `max_neighbors` closest nodes already present there.
//!
//! # Search
//!
//! Queries scan every level linearly, bottom first, keep the `k` closest of
//! each level in order, and truncate the concatenation to `k`. Results are
//! therefore ordered level by level rather than merged globally; with the
//! bottom level holding every node, the first `k` entries are the exact
//! `k` nearest whenever the bottom level has at least `k` nodes.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::node::{Level, Node};
use super::sampler::LevelSampler;
use crate::config::IndexConfig;
use crate::error::{Error, Result};
use crate::vector::Vector;

/// A search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Key the vector was inserted under.
    pub id: String,
    /// The stored vector.
    pub vector: Vector,
    /// Euclidean distance to the query.
    pub distance: f64,
}

/// In-memory multi-level approximate nearest-neighbor index.
///
/// Mutations take `&mut self`; wrap the index in
/// [`SharedIndex`](super::SharedIndex) to share it between threads.
///
/// # Example
///
/// ```rust
/// use gector_core::{HnswIndex, Vector};
///
/// let mut index = HnswIndex::with_seed(5, 4, 7);
/// index.add_vector("a", Vector::new("a", vec![1.0, 0.0]));
/// index.add_vector("b", Vector::new("b", vec![5.0, 0.0]));
///
/// let hits = index.nearest_neighbors(&Vector::new("q", vec![0.0, 0.0]), 1);
/// assert_eq!(hits[0].id, "a");
/// ```
#[derive(Debug)]
pub struct HnswIndex {
    /// Canonical vector for each key.
    nodes: FxHashMap<String, Arc<Vector>>,
    /// Index 0 is the top level; allocated on first insertion.
    levels: Vec<Option<Level>>,
    max_neighbors: usize,
    max_levels: usize,
    pub(super) sampler: LevelSampler,
    next_seq: u64,
}

impl HnswIndex {
    /// Creates an empty index with entropy-seeded level assignment.
    ///
    /// Parameters are stored as given. With `max_levels == 0` the index
    /// accepts insertions but stores nothing.
    #[must_use]
    pub fn new(max_neighbors: usize, max_levels: usize) -> Self {
        Self::with_sampler(max_neighbors, max_levels, LevelSampler::default())
    }

    /// Creates an empty index whose level assignment is reproducible.
    #[must_use]
    pub fn with_seed(max_neighbors: usize, max_levels: usize, seed: u64) -> Self {
        Self::with_sampler(
            max_neighbors,
            max_levels,
            LevelSampler::seeded(super::sampler::DEFAULT_PROMOTION_PROBABILITY, seed),
        )
    }

    /// Creates an empty index with a custom level sampler.
    #[must_use]
    pub fn with_sampler(max_neighbors: usize, max_levels: usize, sampler: LevelSampler) -> Self {
        Self {
            nodes: FxHashMap::default(),
            levels: (0..max_levels).map(|_| None).collect(),
            max_neighbors,
            max_levels,
            sampler,
            next_seq: 0,
        }
    }

    /// Creates an empty index from the `[index]` configuration section.
    #[must_use]
    pub fn from_config(config: &IndexConfig) -> Self {
        Self::with_sampler(
            config.max_neighbors,
            config.max_levels,
            LevelSampler::from_config(config),
        )
    }

    /// Maximum neighbor list length per level.
    #[must_use]
    pub fn max_neighbors(&self) -> usize {
        self.max_neighbors
    }

    /// Number of levels.
    #[must_use]
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Number of distinct keys in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the index holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the vector currently stored under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Vector> {
        self.nodes.get(id).map(|vector| &**vector)
    }

    /// Returns a level, or `None` if it is out of range or was never used.
    #[must_use]
    pub fn level(&self, level: usize) -> Option<&Level> {
        self.levels.get(level).and_then(Option::as_ref)
    }

    /// Number of nodes at `level`.
    #[must_use]
    pub fn level_len(&self, level: usize) -> usize {
        self.level(level).map_or(0, Level::len)
    }

    /// Levels holding a node for `id`, top first.
    #[must_use]
    pub fn levels_of(&self, id: &str) -> Vec<usize> {
        self.levels
            .iter()
            .enumerate()
            .filter(|(_, level)| matches!(level, Some(layer) if layer.contains(id)))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Neighbor list of `id` at `level`, including IDs deleted since.
    #[must_use]
    pub fn neighbors(&self, id: &str, level: usize) -> Option<&[String]> {
        self.level(level)?.get(id).map(Node::neighbors)
    }

    /// Neighbor list of `id` at `level`, skipping IDs no longer at that level.
    #[must_use]
    pub fn live_neighbors(&self, id: &str, level: usize) -> Vec<&str> {
        let Some(layer) = self.level(level) else {
            return Vec::new();
        };
        layer.get(id).map_or_else(Vec::new, |node| {
            node.neighbors()
                .iter()
                .map(String::as_str)
                .filter(|neighbor| layer.contains(neighbor))
                .collect()
        })
    }

    /// Inserts `vector` under `id`.
    ///
    /// Never fails. Inserting an ID that is already present without deleting
    /// it first overwrites the levels the new insertion reaches and leaves
    /// the old node on any other level; lookups and search results resolve to
    /// the newest vector. Use [`try_add_vector`](Self::try_add_vector) to
    /// reject duplicates instead.
    pub fn add_vector(&mut self, id: impl Into<String>, vector: Vector) {
        let id = id.into();
        let Some(bottom) = self.max_levels.checked_sub(1) else {
            debug!(id = %id, "index has no levels; vector dropped");
            return;
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        let vector = Arc::new(vector);

        let mut level = bottom;
        self.insert_at_level(Node::new(id.clone(), Arc::clone(&vector), seq), level);
        while level > 0 && self.sampler.promote() {
            level -= 1;
            self.insert_at_level(Node::new(id.clone(), Arc::clone(&vector), seq), level);
        }

        debug!(id = %id, top_level = level, levels = bottom - level + 1, "vector added");
        self.nodes.insert(id, vector);
    }

    /// Inserts `vector` under `id` unless the ID is already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if `id` is present.
    pub fn try_add_vector(&mut self, id: impl Into<String>, vector: Vector) -> Result<()> {
        let id = id.into();
        if self.contains(&id) {
            return Err(Error::AlreadyExists(id));
        }
        self.add_vector(id, vector);
        Ok(())
    }

    /// Replaces the vector stored under `id` with a freshly placed one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` is not present.
    pub fn update_vector(&mut self, id: &str, vector: Vector) -> Result<()> {
        if !self.contains(id) {
            return Err(Error::NotFound(id.to_string()));
        }

        self.delete_vector(id)?;
        self.add_vector(id, vector);
        debug!(id = %id, "vector updated");
        Ok(())
    }

    /// Removes `id` from every level.
    ///
    /// Deleting an absent ID is a no-op. Other nodes' neighbor lists keep
    /// the ID; see [`live_neighbors`](Self::live_neighbors).
    ///
    /// # Errors
    ///
    /// Currently never fails.
    pub fn delete_vector(&mut self, id: &str) -> Result<()> {
        for level in self.levels.iter_mut().flatten() {
            level.remove(id);
        }
        if self.nodes.remove(id).is_some() {
            debug!(id = %id, "vector deleted");
        }
        Ok(())
    }

    /// Returns up to `k` vectors near `query`.
    ///
    /// Each level contributes its `k` closest nodes, bottom level first; the
    /// combined list is cut to `k`.
    #[must_use]
    pub fn nearest_neighbors(&self, query: &Vector, k: usize) -> Vec<Vector> {
        self.search(query, k)
            .into_iter()
            .map(|result| result.vector)
            .collect()
    }

    /// Same as [`nearest_neighbors`](Self::nearest_neighbors) with keys and
    /// distances attached.
    #[must_use]
    pub fn search(&self, query: &Vector, k: usize) -> Vec<SearchResult> {
        let mut results = Vec::new();

        for level in self.levels.iter().rev().flatten() {
            for candidate in level.ranked(&query.values, None).into_iter().take(k) {
                let node = candidate.node;
                let vector = self
                    .nodes
                    .get(node.id())
                    .unwrap_or_else(|| node.shared_vector());
                results.push(SearchResult {
                    id: node.id().to_string(),
                    vector: Vector::clone(vector),
                    distance: candidate.distance,
                });
            }
        }

        results.truncate(k);
        debug!(k, returned = results.len(), "search complete");
        results
    }

    /// Removes every vector, keeping the configuration and sampler state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        for level in &mut self.levels {
            *level = None;
        }
    }

    fn insert_at_level(&mut self, node: Node, level: usize) {
        let max_neighbors = self.max_neighbors;
        let layer = self.levels[level].get_or_insert_with(Level::new);
        layer.insert_linked(node, max_neighbors);
        trace!(level, size = layer.len(), "node linked");
    }
}
