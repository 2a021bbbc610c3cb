//! End-to-end comparison run.
//!
//! Fetches per-language results, groups them by family and area, pulls
//! semantic chains per family, and produces the panel summaries plus the
//! per-family inputs for correlation tracking.

use std::collections::BTreeMap;

use colex_config::ColexConfig;
use colex_core::concepts::ConceptPair;
use colex_core::entities::{LanguageTable, ResultSet, SemanticChain};
use colex_core::enums::Dimension;
use colex_core::responses::GroupSummary;
use colex_correlation::{ComparisonStore, CorrelationTracker};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::grouping::{
    AggregatedGroup, AreaStrategy, FamilyStrategy, area_membership, family_membership,
    group_by_dimension,
};
use crate::summary::summarize;

/// Source of per-language comparison results.
pub trait ResultProvider {
    /// Fetch results for `concepts` across `languages`.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying service.
    fn fetch(&self, concepts: &ConceptPair, languages: &[String]) -> anyhow::Result<ResultSet>;
}

/// Source of semantic chains between two concepts within one family.
pub trait ChainProvider {
    /// # Errors
    ///
    /// Any failure of the underlying service.
    fn chains(
        &self,
        concept1: &str,
        concept2: &str,
        family: &str,
    ) -> anyhow::Result<Vec<SemanticChain>>;
}

impl<T: ResultProvider + ?Sized> ResultProvider for &T {
    fn fetch(&self, concepts: &ConceptPair, languages: &[String]) -> anyhow::Result<ResultSet> {
        (**self).fetch(concepts, languages)
    }
}

impl<T: ChainProvider + ?Sized> ChainProvider for &T {
    fn chains(
        &self,
        concept1: &str,
        concept2: &str,
        family: &str,
    ) -> anyhow::Result<Vec<SemanticChain>> {
        (**self).chains(concept1, concept2, family)
    }
}

/// Everything one comparison produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    pub concepts: ConceptPair,
    pub family_groups: BTreeMap<String, AggregatedGroup>,
    pub area_groups: BTreeMap<String, AggregatedGroup>,
    pub family_summaries: Vec<GroupSummary>,
    pub area_summaries: Vec<GroupSummary>,
}

impl ComparisonReport {
    /// Per-family average embedding similarity as a fraction in `[0, 1]`.
    #[must_use]
    pub fn family_similarities(&self) -> BTreeMap<String, f64> {
        self.family_summaries
            .iter()
            .map(|s| (s.name.clone(), s.average_similarity / 100.0))
            .collect()
    }

    /// Per-family enhanced colexification score.
    #[must_use]
    pub fn family_scores(&self) -> BTreeMap<String, f64> {
        self.family_summaries
            .iter()
            .map(|s| (s.name.clone(), s.enhanced_score))
            .collect()
    }

    /// Upsert this comparison into the correlation dataset.
    ///
    /// Returns `false` if no family showed colexification signal.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Correlation`] if the store fails.
    pub fn record_into<S: ComparisonStore>(
        &self,
        tracker: &CorrelationTracker<S>,
    ) -> Result<bool, AnalyticsError> {
        Ok(tracker.record_comparison(
            &self.concepts,
            &self.family_similarities(),
            &self.family_scores(),
        )?)
    }
}

/// Runs comparisons against injected providers.
pub struct ComparisonPipeline<R, C> {
    results: R,
    chains: C,
    languages: LanguageTable,
    bundled_areas: bool,
}

impl<R: ResultProvider, C: ChainProvider> ComparisonPipeline<R, C> {
    pub const fn new(results: R, chains: C, languages: LanguageTable) -> Self {
        Self {
            results,
            chains,
            languages,
            bundled_areas: true,
        }
    }

    /// Build a pipeline honoring `general.bundled_areas`.
    pub const fn from_config(
        results: R,
        chains: C,
        languages: LanguageTable,
        config: &ColexConfig,
    ) -> Self {
        Self {
            results,
            chains,
            languages,
            bundled_areas: config.general.bundled_areas,
        }
    }

    /// Fetch results for `languages` and analyze them.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Upstream`] if either provider fails.
    pub fn run(
        &self,
        concepts: &ConceptPair,
        languages: &[String],
    ) -> Result<ComparisonReport, AnalyticsError> {
        tracing::info!(
            concept1 = %concepts.0,
            concept2 = %concepts.1,
            languages = languages.len(),
            "running comparison"
        );
        let results = self
            .results
            .fetch(concepts, languages)
            .map_err(AnalyticsError::Upstream)?;
        self.analyze(concepts, &results)
    }

    /// Analyze an already-fetched result set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Upstream`] if the chain provider fails.
    pub fn analyze(
        &self,
        concepts: &ConceptPair,
        results: &ResultSet,
    ) -> Result<ComparisonReport, AnalyticsError> {
        let family_groups = group_by_dimension(
            results,
            &FamilyStrategy,
            family_membership(&self.languages),
            &self.languages,
            concepts,
        );
        let area_groups = group_by_dimension(
            results,
            &AreaStrategy,
            area_membership(&self.languages, self.bundled_areas),
            &self.languages,
            concepts,
        );

        let mut chains = BTreeMap::new();
        for family in family_groups.keys() {
            let found = self
                .chains
                .chains(&concepts.0, &concepts.1, family)
                .map_err(AnalyticsError::Upstream)?;
            for chain in &found {
                if let Err(err) = chain.validate() {
                    tracing::warn!(family = %family, error = %err, "malformed semantic chain");
                }
            }
            tracing::debug!(family = %family, chains = found.len(), "fetched semantic chains");
            chains.insert(family.clone(), found);
        }

        let family_summaries = summarize(&family_groups, Dimension::Family, &chains);
        let area_summaries = summarize(&area_groups, Dimension::Area, &BTreeMap::new());

        Ok(ComparisonReport {
            concepts: concepts.clone(),
            family_groups,
            area_groups,
            family_summaries,
            area_summaries,
        })
    }
}
