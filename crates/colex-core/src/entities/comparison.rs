use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::concepts::{normalize_concept, same_concept};
use crate::entities::FamilyColexifications;
use crate::enums::ConceptSlot;

/// Similarity of one contextual translation variant pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VariationSimilarity {
    pub similarity: f64,
    pub context: String,
    pub words: (String, String),
}

/// Whether a language colexifies a concept with `concept`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LanguageColexification {
    pub concept: String,
    pub present: bool,
}

/// The comparison of two concepts in one language, as produced by the
/// result provider.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ComparisonResult {
    /// Embedding similarity of the two main translations, in `[0, 1]`.
    pub main_similarity: f64,
    pub main_translations: (String, String),
    #[serde(default)]
    pub variation_similarities: Vec<VariationSimilarity>,
    /// Concept -> usage note.
    #[serde(default)]
    pub usage_notes: BTreeMap<String, String>,
    /// Compared concept -> colexification candidates for this language.
    #[serde(default)]
    pub language_colexifications: BTreeMap<String, Vec<LanguageColexification>>,
    /// Family -> precomputed family-level statistics.
    #[serde(default)]
    pub family_colexifications: BTreeMap<String, FamilyColexifications>,
    /// Embedding vectors of the two main translations.
    #[serde(default)]
    pub embeddings: (Vec<f32>, Vec<f32>),
}

/// Language code -> comparison result. Iteration order is language code order.
pub type ResultSet = BTreeMap<String, ComparisonResult>;

impl ComparisonResult {
    #[must_use]
    pub fn translation(&self, slot: ConceptSlot) -> &str {
        match slot {
            ConceptSlot::First => &self.main_translations.0,
            ConceptSlot::Second => &self.main_translations.1,
        }
    }

    #[must_use]
    pub fn embedding(&self, slot: ConceptSlot) -> &[f32] {
        match slot {
            ConceptSlot::First => &self.embeddings.0,
            ConceptSlot::Second => &self.embeddings.1,
        }
    }

    /// Colexification candidates listed for `concept`.
    ///
    /// Exact key match first, then a case-insensitive match. Returns an empty
    /// slice when the language lists nothing for the concept.
    #[must_use]
    pub fn colexification_candidates(&self, concept: &str) -> &[LanguageColexification] {
        self.language_colexifications
            .get(concept)
            .or_else(|| {
                self.language_colexifications
                    .iter()
                    .find(|(key, _)| same_concept(key, concept))
                    .map(|(_, list)| list)
            })
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Concepts this language actually colexifies with `concept`, as listed
    /// (original spelling, duplicates collapsed).
    #[must_use]
    pub fn present_colexifications(&self, concept: &str) -> BTreeSet<&str> {
        self.colexification_candidates(concept)
            .iter()
            .filter(|colex| colex.present)
            .map(|colex| colex.concept.as_str())
            .collect()
    }

    /// Whether this language colexifies `first` and `second` directly, in
    /// either direction. Concept names compare case-insensitively.
    #[must_use]
    pub fn colexifies_directly(&self, first: &str, second: &str) -> bool {
        let lists = |from: &str, to: &str| {
            let target = normalize_concept(to);
            self.present_colexifications(from)
                .into_iter()
                .any(|c| normalize_concept(c) == target)
        };
        lists(first, second) || lists(second, first)
    }
}
