//! Neighborhood-graph dimensionality reduction to 2D.
//!
//! A compact UMAP: exact euclidean k-nearest neighbors, per-point smooth kNN
//! calibration, fuzzy-union symmetrization of the membership graph, then
//! stochastic gradient descent with negative sampling on a random layout.
//! Every input point is reduced in one joint call so all outputs share a
//! coordinate frame.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ProjectionError;

/// Neighborhood size; clamped to `n - 1` for small inputs.
pub const N_NEIGHBORS: usize = 15;
/// Minimum distance between embedded points. Baked into [`CURVE_A`] and [`CURVE_B`].
pub const MIN_DIST: f64 = 0.1;
pub const N_EPOCHS: usize = 400;

/// Output curve `1 / (1 + a * d^(2b))` fitted for `spread = 1.0`, `min_dist = 0.1`.
const CURVE_A: f64 = 1.576_943_460_405_378;
const CURVE_B: f64 = 0.895_060_878_122_785_9;

const NEGATIVE_SAMPLE_RATE: f64 = 5.0;
const GRADIENT_CLIP: f64 = 4.0;
const INIT_RANGE: f64 = 10.0;
const SMOOTH_K_ITERATIONS: usize = 64;
const SMOOTH_K_TOLERANCE: f64 = 1e-5;
const MIN_K_DIST_SCALE: f64 = 1e-3;

/// One directed edge of the symmetrized membership graph.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    head: usize,
    tail: usize,
    weight: f64,
}

/// UMAP reducer with fixed parameters and a seeded RNG.
#[derive(Debug, Clone)]
pub struct Umap {
    n_neighbors: usize,
    n_epochs: usize,
    seed: u64,
}

impl Umap {
    pub const fn new(seed: u64) -> Self {
        Self {
            n_neighbors: N_NEIGHBORS,
            n_epochs: N_EPOCHS,
            seed,
        }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Reduce `data` to 2D, one output point per input row, in input order.
    ///
    /// Rows are expected to share one dimension and be finite; callers
    /// validate before reducing.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InsufficientData`] for fewer than two rows.
    pub fn fit_transform(&self, data: &[Vec<f32>]) -> Result<Vec<[f64; 2]>, ProjectionError> {
        let n = data.len();
        if n < 2 {
            return Err(ProjectionError::InsufficientData { points: n });
        }

        let k = self.n_neighbors.min(n - 1);
        let neighbors = nearest_neighbors(data, k);
        let edges = fuzzy_union(&neighbors);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut layout: Vec<[f64; 2]> = (0..n)
            .map(|_| {
                [
                    rng.gen_range(-INIT_RANGE..INIT_RANGE),
                    rng.gen_range(-INIT_RANGE..INIT_RANGE),
                ]
            })
            .collect();

        tracing::debug!(points = n, neighbors = k, edges = edges.len(), "optimizing layout");
        optimize(&mut layout, &edges, self.n_epochs, &mut rng);
        Ok(layout)
    }
}

impl Default for Umap {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SEED)
    }
}

fn euclidean(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (f64::from(*x) - f64::from(*y)).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Exact kNN: for each row, the `k` closest other rows by distance, ties
/// broken by index.
fn nearest_neighbors(data: &[Vec<f32>], k: usize) -> Vec<Vec<(usize, f64)>> {
    data.iter()
        .enumerate()
        .map(|(i, row)| {
            let mut dists: Vec<(usize, f64)> = data
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(j, other)| (j, euclidean(row, other)))
                .collect();
            dists.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
            dists.truncate(k);
            dists
        })
        .collect()
}

/// Distance to the nearest distinct neighbor (`rho`) and the bandwidth
/// (`sigma`) at which the neighbor memberships sum to `log2(k)`.
fn smooth_knn(dists: &[f64]) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let k = dists.len() as f64;
    let target = k.log2();
    let rho = dists.iter().copied().find(|d| *d > 0.0).unwrap_or(0.0);

    let mut lo = 0.0;
    let mut hi = f64::INFINITY;
    let mut sigma = 1.0;
    for _ in 0..SMOOTH_K_ITERATIONS {
        let psum: f64 = dists.iter().map(|d| membership(*d, rho, sigma)).sum();
        if (psum - target).abs() < SMOOTH_K_TOLERANCE {
            break;
        }
        if psum > target {
            hi = sigma;
            sigma = (lo + hi) / 2.0;
        } else {
            lo = sigma;
            sigma = if hi.is_infinite() { sigma * 2.0 } else { (lo + hi) / 2.0 };
        }
    }

    let mean = if dists.is_empty() { 0.0 } else { dists.iter().sum::<f64>() / k };
    let floor = (MIN_K_DIST_SCALE * mean).max(f64::MIN_POSITIVE);
    (rho, sigma.max(floor))
}

fn membership(dist: f64, rho: f64, sigma: f64) -> f64 {
    let d = dist - rho;
    if d > 0.0 { (-d / sigma).exp() } else { 1.0 }
}

/// Symmetrize directed memberships with the fuzzy union `a + b - a*b`.
///
/// Both directions of each undirected edge are returned.
fn fuzzy_union(neighbors: &[Vec<(usize, f64)>]) -> Vec<Edge> {
    let mut pairs: BTreeMap<(usize, usize), (f64, f64)> = BTreeMap::new();
    for (i, row) in neighbors.iter().enumerate() {
        let dists: Vec<f64> = row.iter().map(|(_, d)| *d).collect();
        let (rho, sigma) = smooth_knn(&dists);
        for (j, d) in row {
            let w = membership(*d, rho, sigma);
            let entry = pairs.entry((i.min(*j), i.max(*j))).or_default();
            if i < *j {
                entry.0 = w;
            } else {
                entry.1 = w;
            }
        }
    }

    pairs
        .into_iter()
        .map(|((i, j), (a, b))| (i, j, a + b - a * b))
        .filter(|(_, _, w)| *w > 0.0)
        .flat_map(|(i, j, weight)| {
            [
                Edge { head: i, tail: j, weight },
                Edge { head: j, tail: i, weight },
            ]
        })
        .collect()
}

fn clip(value: f64) -> f64 {
    value.clamp(-GRADIENT_CLIP, GRADIENT_CLIP)
}

fn dist_sq(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn optimize(layout: &mut [[f64; 2]], edges: &[Edge], n_epochs: usize, rng: &mut StdRng) {
    let n = layout.len();
    let max_weight = edges.iter().map(|e| e.weight).fold(0.0, f64::max);
    if max_weight <= 0.0 {
        return;
    }
    let epochs = n_epochs as f64;

    // Edges too weak to be sampled once within the epoch budget are dropped.
    let edges: Vec<(Edge, f64)> = edges
        .iter()
        .map(|e| (*e, max_weight / e.weight))
        .filter(|(_, per_sample)| *per_sample <= epochs)
        .collect();
    let mut next_sample: Vec<f64> = edges.iter().map(|(_, per)| *per).collect();
    let mut next_negative: Vec<f64> = edges
        .iter()
        .map(|(_, per)| per / NEGATIVE_SAMPLE_RATE)
        .collect();

    for epoch in 0..n_epochs {
        let now = epoch as f64;
        let alpha = 1.0 - now / epochs;

        for (idx, (edge, per_sample)) in edges.iter().enumerate() {
            if next_sample[idx] > now {
                continue;
            }
            attract(layout, edge.head, edge.tail, alpha);
            next_sample[idx] += per_sample;

            let per_negative = per_sample / NEGATIVE_SAMPLE_RATE;
            let n_negative = ((now - next_negative[idx]) / per_negative).floor().max(0.0) as usize;
            for _ in 0..n_negative {
                let other = rng.gen_range(0..n);
                if other != edge.head {
                    repel(layout, edge.head, other, alpha);
                }
            }
            next_negative[idx] += n_negative as f64 * per_negative;
        }
    }
}

fn attract(layout: &mut [[f64; 2]], head: usize, tail: usize, alpha: f64) {
    let (current, other) = (layout[head], layout[tail]);
    let d2 = dist_sq(current, other);
    if d2 <= 0.0 {
        return;
    }
    let coeff = -2.0 * CURVE_A * CURVE_B * d2.powf(CURVE_B - 1.0)
        / CURVE_A.mul_add(d2.powf(CURVE_B), 1.0);
    for dim in 0..2 {
        let grad = clip(coeff * (current[dim] - other[dim])) * alpha;
        layout[head][dim] += grad;
        layout[tail][dim] -= grad;
    }
}

fn repel(layout: &mut [[f64; 2]], head: usize, other: usize, alpha: f64) {
    let (current, far) = (layout[head], layout[other]);
    let d2 = dist_sq(current, far);
    for dim in 0..2 {
        // Coincident points get the maximal push.
        let grad = if d2 > 0.0 {
            let coeff = 2.0 * CURVE_B / ((0.001 + d2) * CURVE_A.mul_add(d2.powf(CURVE_B), 1.0));
            clip(coeff * (current[dim] - far[dim]))
        } else {
            GRADIENT_CLIP
        };
        layout[head][dim] += grad * alpha;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cluster(offset: f32, size: usize) -> Vec<Vec<f32>> {
        (0..size)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let jitter = i as f32 * 0.01;
                vec![offset + jitter, offset - jitter, offset]
            })
            .collect()
    }

    #[test]
    fn fewer_than_two_rows_is_insufficient() {
        let umap = Umap::default();
        assert_eq!(
            umap.fit_transform(&[]),
            Err(ProjectionError::InsufficientData { points: 0 })
        );
        assert_eq!(
            umap.fit_transform(&[vec![1.0, 2.0]]),
            Err(ProjectionError::InsufficientData { points: 1 })
        );
    }

    #[test]
    fn two_rows_produce_two_finite_points() {
        let layout = Umap::default()
            .fit_transform(&[vec![0.0, 1.0], vec![1.0, 0.0]])
            .unwrap();
        assert_eq!(layout.len(), 2);
        assert!(layout.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn identical_rows_stay_finite() {
        let layout = Umap::default().fit_transform(&vec![vec![0.5; 4]; 5]).unwrap();
        assert_eq!(layout.len(), 5);
        assert!(layout.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn default_reducer_uses_default_seed() {
        assert_eq!(Umap::default().seed(), crate::DEFAULT_SEED);
        assert_eq!(Umap::new(7).seed(), 7);
    }

    #[test]
    fn same_seed_same_layout() {
        let data = [cluster(0.0, 6), cluster(5.0, 6)].concat();
        let a = Umap::new(7).fit_transform(&data).unwrap();
        let b = Umap::new(7).fit_transform(&data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn separated_clusters_keep_local_neighbors() {
        let data = [cluster(0.0, 10), cluster(10.0, 10)].concat();
        let layout = Umap::default().fit_transform(&data).unwrap();

        let same_cluster = (0..layout.len())
            .filter(|&i| {
                let nearest = (0..layout.len())
                    .filter(|&j| j != i)
                    .min_by(|&a, &b| {
                        dist_sq(layout[i], layout[a]).total_cmp(&dist_sq(layout[i], layout[b]))
                    })
                    .unwrap();
                (i < 10) == (nearest < 10)
            })
            .count();
        assert!(same_cluster >= 18, "only {same_cluster} of 20 kept a local neighbor");
    }

    #[test]
    fn neighbors_exclude_self_and_clamp() {
        let data = cluster(0.0, 3);
        let neighbors = nearest_neighbors(&data, 2);
        assert_eq!(neighbors[0].iter().map(|(j, _)| *j).collect::<Vec<_>>(), vec![1, 2]);
        assert!(neighbors.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn fuzzy_union_is_symmetric() {
        let data = [cluster(0.0, 4), cluster(3.0, 2)].concat();
        let edges = fuzzy_union(&nearest_neighbors(&data, 3));
        for edge in &edges {
            assert!(edges.iter().any(|e| e.head == edge.tail
                && e.tail == edge.head
                && (e.weight - edge.weight).abs() < 1e-12));
            assert!(edge.weight > 0.0 && edge.weight <= 1.0);
        }
    }
}
