//! Vector value type accepted and returned by the index.

use serde::{Deserialize, Serialize};

/// A caller-supplied vector.
///
/// `id` is assigned by the caller and need not match the key the vector is
/// inserted under. The index never inspects or validates `values`; vectors of
/// different dimensions may coexist until a distance is computed between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// Caller-assigned identifier.
    pub id: String,
    /// Coordinates.
    pub values: Vec<f64>,
}

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }
}
