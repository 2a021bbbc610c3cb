use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A multi-hop path of colexification links connecting two concepts through
/// intermediate concepts. Produced by the chain provider per
/// `(concept1, concept2, family)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SemanticChain {
    /// Ordered concept names, endpoints included.
    pub path: Vec<String>,
    /// Per-step colexification frequency in `[0, 1]`; one entry per hop.
    pub scores: Vec<f64>,
    /// Aggregate chain strength in `[0, 1]`.
    pub total_score: f64,
}

impl SemanticChain {
    /// Number of hops in the chain (`path.len() - 1`, zero for degenerate paths).
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the chain has at least one hop and one score per hop.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.path.len() >= 2 && self.scores.len() == self.step_count()
    }

    /// Check shape and score ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.is_well_formed() {
            return Err(CoreError::Validation(format!(
                "chain {} has {} score(s) for {} step(s)",
                self.path.join(" -> "),
                self.scores.len(),
                self.step_count()
            )));
        }
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !self.scores.iter().copied().all(in_unit) || !in_unit(self.total_score) {
            return Err(CoreError::Validation(format!(
                "chain {} has scores outside [0, 1]",
                self.path.join(" -> ")
            )));
        }
        Ok(())
    }
}
