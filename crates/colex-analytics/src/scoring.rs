//! Colexification scoring.
//!
//! The direct rate is the share of a group's languages that colexify the two
//! compared concepts. The enhanced score adds evidence from semantic chains,
//! each discounted by `0.8^(steps - 1)`: a one-hop chain counts fully, every
//! extra hop multiplies its weight by 0.8. Contributions are summed and the
//! result is capped to `[0, 1]`, never renormalized.

use colex_core::entities::{FamilyColexifications, SemanticChain};

/// Per-hop decay applied to chain evidence.
pub const CHAIN_DECAY: f64 = 0.8;

/// Direct colexification frequency over total languages; `0.0` for an empty group.
#[must_use]
pub fn direct_rate(colexifications: &FamilyColexifications) -> f64 {
    if colexifications.total_languages == 0 {
        return 0.0;
    }
    f64::from(colexifications.direct_colexification.frequency)
        / f64::from(colexifications.total_languages)
}

/// Weight of one chain's evidence. Chains with fewer than one hop weigh `1.0`.
#[must_use]
pub fn chain_weight(chain: &SemanticChain) -> f64 {
    match chain.step_count() {
        0 | 1 => 1.0,
        steps => i32::try_from(steps - 1).map_or(0.0, |exp| CHAIN_DECAY.powi(exp)),
    }
}

/// Direct rate extended with decayed chain evidence, capped to `[0, 1]`.
///
/// Pure and order-independent: the same rate and chains always produce the
/// same score.
#[must_use]
pub fn enhanced_score(direct_rate: f64, chains: &[SemanticChain]) -> f64 {
    let chain_evidence: f64 = chains
        .iter()
        .map(|chain| chain.total_score * chain_weight(chain))
        .filter(|contribution| !contribution.is_nan())
        .sum();
    clamp_unit(direct_rate + chain_evidence)
}

fn clamp_unit(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use colex_core::entities::ColexificationLink;
    use rstest::rstest;

    use super::*;

    fn chain(path: &[&str], total_score: f64) -> SemanticChain {
        let steps = path.len().saturating_sub(1);
        SemanticChain {
            path: path.iter().map(|s| (*s).to_string()).collect(),
            scores: vec![total_score; steps],
            total_score,
        }
    }

    fn stats(direct: u32, total: u32) -> FamilyColexifications {
        FamilyColexifications {
            direct_colexification: ColexificationLink {
                frequency: direct,
                languages: vec![],
            },
            total_languages: total,
            ..Default::default()
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn direct_rate_is_frequency_over_total() {
        assert_close(direct_rate(&stats(1, 4)), 0.25);
        assert_close(direct_rate(&stats(3, 3)), 1.0);
    }

    #[test]
    fn direct_rate_of_empty_group_is_zero() {
        let rate = direct_rate(&stats(0, 0));
        assert!(rate.is_finite());
        assert_close(rate, 0.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.35)]
    #[case(1.0)]
    fn no_chains_leaves_rate_unchanged(#[case] rate: f64) {
        assert_eq!(enhanced_score(rate, &[]), rate);
    }

    #[test]
    fn single_hop_chain_counts_fully() {
        let score = enhanced_score(0.1, &[chain(&["a", "b"], 0.6)]);
        assert_close(score, 0.7);
    }

    #[test]
    fn overshoot_is_clamped_to_one() {
        let mut two_hops = chain(&["a", "b", "c"], 0.6);
        two_hops.scores = vec![0.8, 0.6];
        assert_close(enhanced_score(0.9, &[two_hops]), 1.0);
    }

    #[rstest]
    #[case(&["a", "b"], 1.0)]
    #[case(&["a", "x", "b"], 0.8)]
    #[case(&["a", "x", "y", "b"], 0.64)]
    #[case(&["a"], 1.0)]
    #[case(&[], 1.0)]
    fn chain_weight_decays_per_extra_hop(#[case] path: &[&str], #[case] expected: f64) {
        assert_close(chain_weight(&chain(path, 0.5)), expected);
    }

    #[test]
    fn chain_order_does_not_matter() {
        let chains = vec![
            chain(&["a", "b"], 0.05),
            chain(&["a", "x", "b"], 0.1),
            chain(&["a", "x", "y", "b"], 0.2),
        ];
        let mut reversed = chains.clone();
        reversed.reverse();
        assert_close(enhanced_score(0.2, &chains), enhanced_score(0.2, &reversed));
    }

    #[test]
    fn negative_inputs_floor_at_zero() {
        assert_close(enhanced_score(-0.5, &[chain(&["a", "b"], 0.1)]), 0.0);
    }

    #[test]
    fn nan_chain_scores_do_not_leak() {
        let score = enhanced_score(0.3, &[chain(&["a", "b"], f64::NAN)]);
        assert_close(score, 0.3);
    }
}
