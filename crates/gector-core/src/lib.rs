//! # `gector` Core
//!
//! In-memory approximate nearest-neighbor index over string-keyed vectors,
//! organized as a multi-level graph in the style of HNSW.
//!
//! ## Features
//!
//! - **Multi-level graph**: every vector lives on the bottom level and is
//!   promoted upward by repeated coin flips
//! - **Per-level neighbor lists**: bounded, directed, computed on insertion
//! - **Deterministic ordering**: distance ties resolve by insertion order
//! - **Configuration**: `gector.toml` + `GECTOR_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use gector_core::{HnswIndex, Vector};
//!
//! let mut index = HnswIndex::new(5, 4);
//! index.add_vector("near", Vector::new("near", vec![1.0, 0.0, 0.0]));
//! index.add_vector("far", Vector::new("far", vec![10.0, 0.0, 0.0]));
//!
//! let query = Vector::new("query", vec![0.0, 0.0, 0.0]);
//! let results = index.nearest_neighbors(&query, 1);
//! assert_eq!(results[0].id, "near");
//!
//! index.update_vector("far", Vector::new("far", vec![0.5, 0.0, 0.0]))?;
//! index.delete_vector("near")?;
//! # Ok::<(), gector_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod distance;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod index;
pub mod vector;
#[cfg(test)]
mod vector_tests;

pub use config::{ConfigError, GectorConfig, IndexConfig, LoggingConfig};
pub use distance::euclidean_distance;
pub use error::{Error, Result};
pub use index::{HnswIndex, Level, LevelSampler, Node, SearchResult, SharedIndex};
pub use vector::Vector;
