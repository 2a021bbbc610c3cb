use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ConceptSlot;

/// How many languages exhibit a colexification, and which ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ColexificationLink {
    pub frequency: u32,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl ColexificationLink {
    /// Count one more language exhibiting this colexification.
    pub fn record(&mut self, language: &str) {
        self.frequency += 1;
        self.languages.push(language.to_string());
    }
}

/// Colexification statistics for one group of languages (a family upstream,
/// or an area built by the grouping engine).
///
/// Invariant: `total_languages` equals the number of group languages present
/// in the current result set, and no `frequency` exceeds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FamilyColexifications {
    /// Colexified concept -> link, for the first compared concept.
    #[serde(default)]
    pub concept1_colexifications: BTreeMap<String, ColexificationLink>,
    /// Colexified concept -> link, for the second compared concept.
    #[serde(default)]
    pub concept2_colexifications: BTreeMap<String, ColexificationLink>,
    /// Languages colexifying the two compared concepts with each other.
    #[serde(default)]
    pub direct_colexification: ColexificationLink,
    #[serde(default)]
    pub total_languages: u32,
}

impl FamilyColexifications {
    /// Colexification map for one side of the compared pair.
    #[must_use]
    pub const fn concept_map(&self, slot: ConceptSlot) -> &BTreeMap<String, ColexificationLink> {
        match slot {
            ConceptSlot::First => &self.concept1_colexifications,
            ConceptSlot::Second => &self.concept2_colexifications,
        }
    }

    pub const fn concept_map_mut(
        &mut self,
        slot: ConceptSlot,
    ) -> &mut BTreeMap<String, ColexificationLink> {
        match slot {
            ConceptSlot::First => &mut self.concept1_colexifications,
            ConceptSlot::Second => &mut self.concept2_colexifications,
        }
    }

    /// Check that no frequency exceeds `total_languages`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let total = self.total_languages;
        self.direct_colexification.frequency <= total
            && ConceptSlot::both()
                .into_iter()
                .flat_map(|slot| self.concept_map(slot).values())
                .all(|link| link.frequency <= total)
    }
}
