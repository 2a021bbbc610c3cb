//! Longitudinal dataset of concept-pair measurements.
//!
//! Every comparison that shows colexification signal in at least one family
//! is upserted into the store, keyed by its ordered concept pair. Each
//! mutation re-reads the store immediately before writing it back, so
//! back-to-back comparisons never overwrite each other with a stale snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use colex_core::concepts::ConceptPair;
use colex_core::entities::StoredComparisonPoint;
use colex_core::responses::ScatterPoint;

use crate::analysis::{Correlation, compute_correlation, scatter_points};
use crate::error::CorrelationError;
use crate::store::ComparisonStore;

/// Build the point to persist for one comparison.
///
/// Returns `None` when no family has a positive, finite colexification score;
/// such a comparison carries no signal for correlation. Both maps of the
/// returned point are restricted to the active families, and non-finite
/// values are left out since they cannot be persisted as JSON numbers.
#[must_use]
pub fn build_point(
    concepts: &ConceptPair,
    family_similarities: &BTreeMap<String, f64>,
    family_scores: &BTreeMap<String, f64>,
    timestamp: DateTime<Utc>,
) -> Option<StoredComparisonPoint> {
    let active: Vec<&String> = family_scores
        .iter()
        .filter(|(_, score)| score.is_finite() && **score > 0.0)
        .map(|(family, _)| family)
        .collect();
    if active.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let coverage = active.len() as f64 / family_scores.len() as f64;
    let pick = |source: &BTreeMap<String, f64>| -> BTreeMap<String, f64> {
        active
            .iter()
            .filter_map(|family| source.get(*family).map(|v| ((*family).clone(), *v)))
            .filter(|(_, v)| v.is_finite())
            .collect()
    };

    Some(StoredComparisonPoint {
        concepts: concepts.clone(),
        timestamp,
        embeddings: pick(family_similarities),
        colexifications: pick(family_scores),
        coverage,
    })
}

/// Records comparisons into a [`ComparisonStore`] and computes analytics
/// over the persisted dataset.
#[derive(Debug)]
pub struct CorrelationTracker<S> {
    store: S,
}

impl<S: ComparisonStore> CorrelationTracker<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Upsert the measurement of `concepts`, stamped with the current time.
    ///
    /// Returns `true` if a point was stored, `false` if the comparison had no
    /// colexification signal and was dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the store cannot be read or written.
    pub fn record_comparison(
        &self,
        concepts: &ConceptPair,
        family_similarities: &BTreeMap<String, f64>,
        family_scores: &BTreeMap<String, f64>,
    ) -> Result<bool, CorrelationError> {
        self.record_comparison_at(concepts, family_similarities, family_scores, Utc::now())
    }

    /// Upsert with an explicit timestamp.
    ///
    /// Any stored point with the identical ordered concept pair is removed
    /// before the new point is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the store cannot be read or written.
    pub fn record_comparison_at(
        &self,
        concepts: &ConceptPair,
        family_similarities: &BTreeMap<String, f64>,
        family_scores: &BTreeMap<String, f64>,
        timestamp: DateTime<Utc>,
    ) -> Result<bool, CorrelationError> {
        let Some(point) = build_point(concepts, family_similarities, family_scores, timestamp)
        else {
            tracing::debug!(
                concept1 = %concepts.0,
                concept2 = %concepts.1,
                "no colexification signal, comparison not recorded"
            );
            return Ok(false);
        };

        let mut points = self.store.load()?;
        let before = points.len();
        points.retain(|existing| !existing.is_pair(concepts));
        let replaced = before != points.len();
        points.push(point);
        self.store.save(&points)?;

        tracing::info!(
            concept1 = %concepts.0,
            concept2 = %concepts.1,
            replaced,
            total = points.len(),
            "recorded comparison"
        );
        Ok(true)
    }

    /// All persisted points, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the store cannot be read.
    pub fn points(&self) -> Result<Vec<StoredComparisonPoint>, CorrelationError> {
        self.store.load()
    }

    /// Correlation across the persisted dataset.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the store cannot be read.
    pub fn correlation(&self) -> Result<Correlation, CorrelationError> {
        Ok(compute_correlation(&self.store.load()?))
    }

    /// Scatter plot points for the persisted dataset.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the store cannot be read.
    pub fn scatter(&self) -> Result<Vec<ScatterPoint>, CorrelationError> {
        Ok(scatter_points(&self.store.load()?))
    }

    /// Discard the entire dataset. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] if the store cannot be cleared.
    pub fn clear(&self) -> Result<(), CorrelationError> {
        self.store.clear()?;
        tracing::info!("correlation dataset cleared");
        Ok(())
    }
}
