//! Pearson correlation between embedding similarity and colexification score.
//!
//! Each stored point contributes one sample: the mean embedding similarity
//! and the mean enhanced colexification score over that point's own active
//! families. Points without any active family contribute nothing.

use colex_core::entities::StoredComparisonPoint;
use colex_core::responses::ScatterPoint;

/// Sum of squared deviations at or below this is treated as zero variance.
const VARIANCE_EPSILON: f64 = 1e-18;

/// Outcome of a correlation computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correlation {
    /// Pearson coefficient in `[-1, 1]`.
    Coefficient(f64),
    /// Fewer than two usable samples.
    InsufficientSamples,
    /// One of the series has zero variance; the coefficient is undefined.
    ZeroVariance,
}

impl Correlation {
    /// The coefficient, or `None` when it is not computable.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Coefficient(r) => Some(r),
            Self::InsufficientSamples | Self::ZeroVariance => None,
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    Some(values.iter().sum::<f64>() / n)
}

/// Mean embedding similarity and mean colexification score over the point's
/// active families.
///
/// Active families missing an embedding entry are left out of the embedding
/// mean. Returns `None` when the point has no active family or no embedding
/// value for any of them.
#[must_use]
pub fn point_averages(point: &StoredComparisonPoint) -> Option<(f64, f64)> {
    let active = point.active_families();
    let embeddings: Vec<f64> = active
        .iter()
        .filter_map(|family| point.embeddings.get(*family).copied())
        .collect();
    let scores: Vec<f64> = active
        .iter()
        .filter_map(|family| point.colexifications.get(*family).copied())
        .collect();
    Some((mean(&embeddings)?, mean(&scores)?))
}

/// Pearson correlation coefficient of two equally long series.
///
/// `r = Σ(xi−x̄)(yi−ȳ) / sqrt(Σ(xi−x̄)² · Σ(yi−ȳ)²)`
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Correlation {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Correlation::InsufficientSamples;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let (Some(mean_x), Some(mean_y)) = (mean(xs), mean(ys)) else {
        return Correlation::InsufficientSamples;
    };

    let mut covariance = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    if sum_sq_x <= VARIANCE_EPSILON || sum_sq_y <= VARIANCE_EPSILON {
        return Correlation::ZeroVariance;
    }
    let r = covariance / (sum_sq_x * sum_sq_y).sqrt();
    if r.is_finite() {
        Correlation::Coefficient(r.clamp(-1.0, 1.0))
    } else {
        Correlation::ZeroVariance
    }
}

/// Correlation across all stored points.
#[must_use]
pub fn compute_correlation(points: &[StoredComparisonPoint]) -> Correlation {
    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().filter_map(point_averages).unzip();
    pearson(&xs, &ys)
}

/// Scatter plot points with tooltip fields, in stored order.
#[must_use]
pub fn scatter_points(points: &[StoredComparisonPoint]) -> Vec<ScatterPoint> {
    points
        .iter()
        .filter_map(|point| {
            let (embedding_similarity, colexification_score) = point_averages(point)?;
            Some(ScatterPoint {
                concepts: point.concepts.clone(),
                embedding_similarity,
                colexification_score,
                coverage: point.coverage,
                active_families: point.active_families().len(),
                total_families: point.colexifications.len(),
                timestamp: point.timestamp,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    fn sample(x: f64, y: f64) -> StoredComparisonPoint {
        StoredComparisonPoint {
            concepts: (format!("x{x}"), format!("y{y}")),
            timestamp: Utc::now(),
            embeddings: BTreeMap::from([("F".to_string(), x)]),
            colexifications: BTreeMap::from([("F".to_string(), y)]),
            coverage: 1.0,
        }
    }

    fn assert_close(actual: Correlation, expected: f64) {
        let r = actual.value().expect("coefficient should be computable");
        assert!((r - expected).abs() < 1e-12, "expected {expected}, got {r}");
    }

    #[test]
    fn perfect_positive_correlation() {
        assert_close(compute_correlation(&[sample(0.2, 0.2), sample(0.8, 0.8)]), 1.0);
    }

    #[test]
    fn perfect_negative_correlation() {
        assert_close(compute_correlation(&[sample(0.2, 0.8), sample(0.8, 0.2)]), -1.0);
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![sample(0.4, 0.6)])]
    fn fewer_than_two_points_is_insufficient(#[case] points: Vec<StoredComparisonPoint>) {
        assert_eq!(
            compute_correlation(&points),
            Correlation::InsufficientSamples
        );
    }

    #[test]
    fn constant_series_is_zero_variance() {
        let points = [sample(0.1, 0.2), sample(0.1, 0.5), sample(0.1, 0.9)];
        assert_eq!(compute_correlation(&points), Correlation::ZeroVariance);
        assert_eq!(compute_correlation(&points).value(), None);
    }

    #[test]
    fn points_without_active_families_are_skipped() {
        let mut silent = sample(0.9, 0.0);
        silent.concepts = ("silent".into(), "pair".into());
        let points = [sample(0.2, 0.2), silent, sample(0.8, 0.8)];
        assert_close(compute_correlation(&points), 1.0);
        assert_eq!(scatter_points(&points).len(), 2);
    }

    #[test]
    fn averages_use_only_active_families() {
        let point = StoredComparisonPoint {
            concepts: ("a".into(), "b".into()),
            timestamp: Utc::now(),
            embeddings: BTreeMap::from([
                ("A".to_string(), 0.4),
                ("B".to_string(), 0.8),
                ("C".to_string(), 0.1),
            ]),
            colexifications: BTreeMap::from([
                ("A".to_string(), 0.2),
                ("B".to_string(), 0.6),
                ("C".to_string(), 0.0),
            ]),
            coverage: 2.0 / 3.0,
        };
        let (emb, colex) = point_averages(&point).unwrap();
        assert!((emb - 0.6).abs() < 1e-12);
        assert!((colex - 0.4).abs() < 1e-12);

        let scatter = scatter_points(std::slice::from_ref(&point));
        assert_eq!(scatter[0].active_families, 2);
        assert_eq!(scatter[0].total_families, 3);
    }

    #[test]
    fn moderate_correlation_matches_hand_computation() {
        // x = [1, 2, 3], y = [1, 3, 2] -> r = 0.5
        let points = [sample(0.1, 0.1), sample(0.2, 0.3), sample(0.3, 0.2)];
        assert_close(compute_correlation(&points), 0.5);
    }

    #[test]
    fn scatter_point_carries_tooltip_fields() {
        let mut point = sample(0.3, 0.7);
        point.coverage = 0.25;
        let scatter = scatter_points(std::slice::from_ref(&point));
        assert_eq!(scatter.len(), 1);
        assert_eq!(scatter[0].concepts, point.concepts);
        assert_eq!(scatter[0].active_families, 1);
        assert_eq!(scatter[0].total_families, 1);
        assert!((scatter[0].coverage - 0.25).abs() < f64::EPSILON);
        assert_eq!(scatter[0].timestamp, point.timestamp);
    }
}
