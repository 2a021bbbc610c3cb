use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::concepts::ConceptPair;

/// One persisted measurement of a concept pair, restricted to the families
/// that showed colexification signal. Created or overwritten when a
/// comparison completes; never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StoredComparisonPoint {
    pub concepts: ConceptPair,
    pub timestamp: DateTime<Utc>,
    /// Family -> average embedding similarity in `[0, 1]`.
    pub embeddings: BTreeMap<String, f64>,
    /// Family -> enhanced colexification score in `[0, 1]`.
    pub colexifications: BTreeMap<String, f64>,
    /// Fraction of families with nonzero colexification at record time.
    pub coverage: f64,
}

impl StoredComparisonPoint {
    /// Families of this point with a nonzero colexification score.
    #[must_use]
    pub fn active_families(&self) -> Vec<&str> {
        self.colexifications
            .iter()
            .filter(|(_, score)| **score > 0.0)
            .map(|(family, _)| family.as_str())
            .collect()
    }

    /// Whether this point measures exactly `concepts` (order-sensitive).
    #[must_use]
    pub fn is_pair(&self, concepts: &ConceptPair) -> bool {
        self.concepts == *concepts
    }
}
