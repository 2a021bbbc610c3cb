//! Per-group panel values: average similarity, direct rate, enhanced score.

use std::collections::BTreeMap;

use colex_core::entities::SemanticChain;
use colex_core::enums::Dimension;
use colex_core::responses::GroupSummary;

use crate::grouping::AggregatedGroup;
use crate::scoring::{direct_rate, enhanced_score};

/// Summarize every group, in group-name order.
///
/// `chains` is keyed by group name; a group without an entry scores on its
/// direct rate alone.
#[must_use]
pub fn summarize(
    groups: &BTreeMap<String, AggregatedGroup>,
    dimension: Dimension,
    chains: &BTreeMap<String, Vec<SemanticChain>>,
) -> Vec<GroupSummary> {
    groups
        .iter()
        .map(|(name, group)| {
            let group_chains = chains.get(name).map(Vec::as_slice).unwrap_or_default();
            let rate = direct_rate(&group.colexifications);
            GroupSummary {
                name: name.clone(),
                dimension,
                average_similarity: group.average_similarity(),
                direct_rate: rate,
                enhanced_score: enhanced_score(rate, group_chains),
                chain_count: group_chains.len(),
                language_count: group.member_language_codes.len(),
            }
        })
        .collect()
}
