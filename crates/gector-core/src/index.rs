//! Index engine.
//!
//! [`HnswIndex`] owns the nodes of every level and answers k-nearest queries;
//! [`SharedIndex`] serializes access to one index across threads.

mod candidate;
mod hnsw;
mod node;
mod sampler;
mod shared;

pub use hnsw::{HnswIndex, SearchResult};
pub use node::{Level, Node};
pub use sampler::{LevelSampler, DEFAULT_PROMOTION_PROBABILITY};
pub use shared::SharedIndex;
