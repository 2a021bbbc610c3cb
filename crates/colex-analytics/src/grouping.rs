//! Grouping engine.
//!
//! Partitions a per-language result set into per-family or per-area buckets.
//! The two dimensions merge colexification evidence differently, so each is a
//! [`GroupingStrategy`]:
//!
//! - [`FamilyStrategy`] adopts the precomputed family statistics shipped with
//!   the results (first language that carries them wins; never re-summed).
//! - [`AreaStrategy`] has no upstream statistics and counts presence per
//!   language from each language's own colexification lists.
//!
//! Languages without a group key are excluded silently. Groups are rebuilt
//! from scratch on every call and only exist once a language joined them.

use std::collections::{BTreeMap, BTreeSet};

use colex_core::concepts::ConceptPair;
use colex_core::entities::{
    ComparisonResult, FamilyColexifications, LanguageTable, ResultSet, VariationSimilarity,
};
use colex_core::enums::{ConceptSlot, Dimension};
use colex_core::reference;
use serde::{Deserialize, Serialize};

/// One language's similarity entry inside a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingEntry {
    /// Language display name.
    pub language: String,
    /// Main similarity in percent.
    pub similarity: f64,
    pub variations: Vec<VariationSimilarity>,
}

/// A family or area with its members' similarities and merged colexification
/// evidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregatedGroup {
    pub embeddings: Vec<EmbeddingEntry>,
    pub colexifications: FamilyColexifications,
    pub member_language_codes: BTreeSet<String>,
}

impl AggregatedGroup {
    /// Mean member similarity in percent; `0.0` for a group without entries.
    #[must_use]
    pub fn average_similarity(&self) -> f64 {
        if self.embeddings.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.embeddings.len() as f64;
        self.embeddings.iter().map(|e| e.similarity).sum::<f64>() / n
    }
}

/// How one grouping dimension folds a language's colexification evidence
/// into its group.
pub trait GroupingStrategy {
    fn dimension(&self) -> Dimension;

    /// Merge the evidence of language `code` into the group's structure.
    ///
    /// `merged` is `None` until the strategy first populates it.
    fn merge(
        &self,
        merged: &mut Option<FamilyColexifications>,
        code: &str,
        result: &ComparisonResult,
        group_key: &str,
        concepts: &ConceptPair,
    );
}

/// Family grouping over precomputed family-level statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyStrategy;

impl GroupingStrategy for FamilyStrategy {
    fn dimension(&self) -> Dimension {
        Dimension::Family
    }

    fn merge(
        &self,
        merged: &mut Option<FamilyColexifications>,
        _code: &str,
        result: &ComparisonResult,
        group_key: &str,
        _concepts: &ConceptPair,
    ) {
        // Every language of a family carries the same statistics upstream.
        if merged.is_none() {
            *merged = result.family_colexifications.get(group_key).cloned();
        }
    }
}

/// Area grouping, counting colexification presence language by language.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaStrategy;

impl GroupingStrategy for AreaStrategy {
    fn dimension(&self) -> Dimension {
        Dimension::Area
    }

    fn merge(
        &self,
        merged: &mut Option<FamilyColexifications>,
        code: &str,
        result: &ComparisonResult,
        _group_key: &str,
        concepts: &ConceptPair,
    ) {
        let stats = merged.get_or_insert_with(FamilyColexifications::default);

        for (slot, concept) in [
            (ConceptSlot::First, &concepts.0),
            (ConceptSlot::Second, &concepts.1),
        ] {
            let map = stats.concept_map_mut(slot);
            for colexified in result.present_colexifications(concept) {
                map.entry(colexified.to_string()).or_default().record(code);
            }
        }

        if result.colexifies_directly(&concepts.0, &concepts.1) {
            stats.direct_colexification.record(code);
        }
        stats.total_languages += 1;
    }
}

#[derive(Default)]
struct GroupBuilder {
    embeddings: Vec<EmbeddingEntry>,
    merged: Option<FamilyColexifications>,
    members: BTreeSet<String>,
}

impl GroupBuilder {
    fn finish(self) -> AggregatedGroup {
        AggregatedGroup {
            embeddings: self.embeddings,
            colexifications: self.merged.unwrap_or_default(),
            member_language_codes: self.members,
        }
    }
}

/// Display name for a language: caller table, bundled table, then the code.
fn display_name(code: &str, languages: &LanguageTable) -> String {
    languages.get(code).map_or_else(
        || reference::language_name(code).unwrap_or(code).to_string(),
        |info| info.name.clone(),
    )
}

/// Group `results` along the strategy's dimension.
///
/// `membership` resolves a language code to its group key; `None` (or a
/// blank key) excludes the language.
pub fn group_by_dimension<S, M>(
    results: &ResultSet,
    strategy: &S,
    membership: M,
    languages: &LanguageTable,
    concepts: &ConceptPair,
) -> BTreeMap<String, AggregatedGroup>
where
    S: GroupingStrategy + ?Sized,
    M: Fn(&str) -> Option<String>,
{
    let mut builders: BTreeMap<String, GroupBuilder> = BTreeMap::new();

    for (code, result) in results {
        let Some(key) = membership(code).filter(|k| !k.trim().is_empty()) else {
            tracing::debug!(
                language = %code,
                dimension = %strategy.dimension(),
                "no group mapping, language excluded"
            );
            continue;
        };

        let builder = builders.entry(key.clone()).or_default();
        builder.embeddings.push(EmbeddingEntry {
            language: display_name(code, languages),
            similarity: result.main_similarity * 100.0,
            variations: result.variation_similarities.clone(),
        });
        builder.members.insert(code.clone());
        strategy.merge(&mut builder.merged, code, result, &key, concepts);
    }

    tracing::debug!(
        dimension = %strategy.dimension(),
        groups = builders.len(),
        languages = results.len(),
        "grouped comparison results"
    );

    builders
        .into_iter()
        .map(|(key, builder)| (key, builder.finish()))
        .collect()
}

/// Family membership from the caller's language table.
pub fn family_membership(languages: &LanguageTable) -> impl Fn(&str) -> Option<String> + '_ {
    move |code: &str| languages.get(code).map(|info| info.family.clone())
}

/// Area membership: the caller's table first, then (if `bundled`) the
/// bundled reference table.
pub fn area_membership(
    languages: &LanguageTable,
    bundled: bool,
) -> impl Fn(&str) -> Option<String> + '_ {
    move |code: &str| {
        languages
            .get(code)
            .and_then(|info| info.area.clone())
            .or_else(|| {
                bundled
                    .then(|| reference::language_area(code))
                    .flatten()
                    .map(|area| area.name.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use colex_core::entities::{ColexificationLink, LanguageColexification, LanguageInfo};
    use pretty_assertions::assert_eq;

    use super::*;

    fn concepts() -> ConceptPair {
        ("tree".to_string(), "wood".to_string())
    }

    fn colex(entries: &[(&str, bool)]) -> Vec<LanguageColexification> {
        entries
            .iter()
            .map(|(concept, present)| LanguageColexification {
                concept: (*concept).to_string(),
                present: *present,
            })
            .collect()
    }

    fn result(
        similarity: f64,
        tree: &[(&str, bool)],
        wood: &[(&str, bool)],
        family: Option<(&str, FamilyColexifications)>,
    ) -> ComparisonResult {
        ComparisonResult {
            main_similarity: similarity,
            main_translations: ("t".into(), "w".into()),
            variation_similarities: vec![],
            usage_notes: BTreeMap::new(),
            language_colexifications: BTreeMap::from([
                ("tree".to_string(), colex(tree)),
                ("wood".to_string(), colex(wood)),
            ]),
            family_colexifications: family
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            embeddings: (vec![], vec![]),
        }
    }

    fn table(entries: &[(&str, &str, &str)]) -> LanguageTable {
        entries
            .iter()
            .map(|(code, name, family)| {
                (
                    (*code).to_string(),
                    LanguageInfo {
                        name: (*name).to_string(),
                        family: (*family).to_string(),
                        area: None,
                    },
                )
            })
            .collect()
    }

    fn family_stats(direct: u32, total: u32) -> FamilyColexifications {
        FamilyColexifications {
            direct_colexification: ColexificationLink {
                frequency: direct,
                languages: vec![],
            },
            total_languages: total,
            ..Default::default()
        }
    }

    #[test]
    fn family_grouping_takes_first_statistics_verbatim() {
        let languages = table(&[
            ("deu", "German", "Indo-European"),
            ("fra", "French", "Indo-European"),
        ]);
        let results = ResultSet::from([
            (
                "deu".to_string(),
                result(0.6, &[], &[], Some(("Indo-European", family_stats(1, 2)))),
            ),
            (
                "fra".to_string(),
                result(0.8, &[], &[], Some(("Indo-European", family_stats(9, 9)))),
            ),
        ]);

        let groups = group_by_dimension(
            &results,
            &FamilyStrategy,
            family_membership(&languages),
            &languages,
            &concepts(),
        );

        let ie = &groups["Indo-European"];
        assert_eq!(ie.colexifications, family_stats(1, 2));
        assert_eq!(ie.embeddings.len(), 2);
        assert_eq!(ie.embeddings[0].language, "German");
        assert!((ie.average_similarity() - 70.0).abs() < 1e-9);
        assert_eq!(
            ie.member_language_codes.iter().collect::<Vec<_>>(),
            vec!["deu", "fra"]
        );
    }

    #[test]
    fn unmapped_languages_are_excluded() {
        let languages = table(&[("deu", "German", "Indo-European")]);
        let results = ResultSet::from([
            ("deu".to_string(), result(0.6, &[], &[], None)),
            ("xxx".to_string(), result(0.9, &[], &[], None)),
        ]);

        let groups = group_by_dimension(
            &results,
            &FamilyStrategy,
            family_membership(&languages),
            &languages,
            &concepts(),
        );

        assert_eq!(groups.len(), 1);
        assert!(!groups["Indo-European"].member_language_codes.contains("xxx"));
    }

    #[test]
    fn blank_group_keys_are_excluded() {
        let results = ResultSet::from([("deu".to_string(), result(0.6, &[], &[], None))]);
        let groups = group_by_dimension(
            &results,
            &AreaStrategy,
            |_: &str| Some("  ".to_string()),
            &LanguageTable::new(),
            &concepts(),
        );
        assert!(groups.is_empty());
    }

    #[test]
    fn area_grouping_counts_presence_per_language() {
        let results = ResultSet::from([
            (
                "deu".to_string(),
                result(0.6, &[("WOOD", true), ("FOREST", true)], &[], None),
            ),
            (
                "fra".to_string(),
                result(0.8, &[("FOREST", true), ("BRANCH", false)], &[("TREE", true)], None),
            ),
            ("eng".to_string(), result(0.4, &[], &[], None)),
        ]);

        let groups = group_by_dimension(
            &results,
            &AreaStrategy,
            area_membership(&LanguageTable::new(), true),
            &LanguageTable::new(),
            &concepts(),
        );

        let europe = &groups["European"];
        let stats = &europe.colexifications;
        assert_eq!(stats.total_languages, 3);
        assert_eq!(stats.direct_colexification.frequency, 2);
        assert_eq!(stats.direct_colexification.languages, vec!["deu", "fra"]);
        assert_eq!(stats.concept1_colexifications["FOREST"].frequency, 2);
        assert_eq!(stats.concept1_colexifications["WOOD"].frequency, 1);
        assert!(!stats.concept1_colexifications.contains_key("BRANCH"));
        assert_eq!(stats.concept2_colexifications["TREE"].languages, vec!["fra"]);
        assert!(stats.is_consistent());
        assert_eq!(europe.embeddings[0].language, "German");
    }

    #[test]
    fn area_membership_prefers_caller_table() {
        let mut languages = table(&[("eng", "English", "Indo-European")]);
        languages.get_mut("eng").unwrap().area = Some("Atlantic".into());
        let membership = area_membership(&languages, true);
        assert_eq!(membership("eng").as_deref(), Some("Atlantic"));
        assert_eq!(membership("jpn").as_deref(), Some("East Asian"));
        assert_eq!(membership("xxx"), None);

        let no_bundled = area_membership(&languages, false);
        assert_eq!(no_bundled("jpn"), None);
    }

    #[test]
    fn grouping_is_idempotent() {
        let languages = table(&[("deu", "German", "Indo-European"), ("fin", "Finnish", "Uralic")]);
        let results = ResultSet::from([
            ("deu".to_string(), result(0.6, &[("WOOD", true)], &[], None)),
            ("fin".to_string(), result(0.3, &[], &[("TREE", true)], None)),
        ]);
        let run = || {
            group_by_dimension(
                &results,
                &AreaStrategy,
                area_membership(&languages, true),
                &languages,
                &concepts(),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn display_name_falls_back_to_code() {
        assert_eq!(display_name("qqq", &LanguageTable::new()), "qqq");
        assert_eq!(display_name("fin", &LanguageTable::new()), "Finnish");
    }
}
