//! JSONL vector loading.
//!
//! One vector per line: `{"id": "a", "values": [0.1, 0.2]}`. Blank lines are
//! ignored. Lines that fail to parse, or whose dimension differs from the first
//! valid vector, are counted as skipped.

use anyhow::{Context, Result};
use gector_core::Vector;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Vectors read from a file, plus bookkeeping.
#[derive(Debug, Default)]
pub struct Loaded {
    pub vectors: Vec<Vector>,
    /// Dimension of the first valid vector.
    pub dimension: Option<usize>,
    pub skipped: usize,
}

pub fn load_jsonl(path: &Path) -> Result<Loaded> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open JSONL file {}", path.display()))?;
    read_jsonl(BufReader::with_capacity(64 * 1024, file))
}

pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Loaded> {
    let mut loaded = Loaded::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let vector = match serde_json::from_str::<Vector>(&line) {
            Ok(vector) => vector,
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "skipping unparsable line");
                loaded.skipped += 1;
                continue;
            }
        };

        let dimension = *loaded.dimension.get_or_insert(vector.dimension());
        if vector.dimension() != dimension {
            tracing::warn!(
                line = line_no + 1,
                expected = dimension,
                actual = vector.dimension(),
                "skipping vector with mismatched dimension"
            );
            loaded.skipped += 1;
            continue;
        }

        loaded.vectors.push(vector);
    }

    Ok(loaded)
}
