//! # colex-projection
//!
//! Places every translated word of a comparison in one shared 2D frame.
//!
//! Each language contributes two vectors, its concept-1 and concept-2
//! embeddings. All vectors are reduced together by [`umap::Umap`], so
//! distances stay comparable across languages and concepts. Output order
//! follows the flattening: per language (result-set order), concept 1 then
//! concept 2.

pub mod error;
pub mod umap;

use colex_config::ProjectionConfig;
use colex_core::entities::ResultSet;
use colex_core::enums::ConceptSlot;
use colex_core::responses::ProjectedPoint;

pub use error::ProjectionError;
pub use umap::Umap;

/// Seed used by [`project`].
pub const DEFAULT_SEED: u64 = 42;

struct FlatPoint<'a> {
    language: &'a str,
    concept: ConceptSlot,
    translation: &'a str,
    similarity: f64,
}

/// Project `results` with the default seed.
///
/// # Errors
///
/// See [`project_with_seed`].
pub fn project(results: &ResultSet) -> Result<Vec<ProjectedPoint>, ProjectionError> {
    project_with_seed(results, DEFAULT_SEED)
}

/// Project `results` with the configured seed.
///
/// # Errors
///
/// See [`project_with_seed`].
pub fn project_with_config(
    results: &ResultSet,
    config: &ProjectionConfig,
) -> Result<Vec<ProjectedPoint>, ProjectionError> {
    project_with_seed(results, config.seed)
}

/// Project `results` into 2D. The same input and seed always produce the
/// same layout.
///
/// # Errors
///
/// - [`ProjectionError::InsufficientData`] if fewer than two vectors result
/// - [`ProjectionError::DimensionMismatch`] if embeddings differ in length
/// - [`ProjectionError::NonFiniteInput`] if an embedding holds NaN or infinity
pub fn project_with_seed(
    results: &ResultSet,
    seed: u64,
) -> Result<Vec<ProjectedPoint>, ProjectionError> {
    let mut meta: Vec<FlatPoint<'_>> = Vec::with_capacity(results.len() * 2);
    let mut vectors: Vec<Vec<f32>> = Vec::with_capacity(results.len() * 2);

    for (code, result) in results {
        for slot in ConceptSlot::both() {
            let embedding = result.embedding(slot);
            let expected = vectors.first().map_or(embedding.len(), Vec::len);
            if embedding.len() != expected {
                return Err(ProjectionError::DimensionMismatch {
                    expected,
                    found: embedding.len(),
                    language: code.clone(),
                });
            }
            if embedding.iter().any(|v| !v.is_finite()) {
                return Err(ProjectionError::NonFiniteInput {
                    language: code.clone(),
                });
            }
            vectors.push(embedding.to_vec());
            meta.push(FlatPoint {
                language: code,
                concept: slot,
                translation: result.translation(slot),
                similarity: result.main_similarity,
            });
        }
    }

    let umap = Umap::new(seed);
    let layout = umap.fit_transform(&vectors)?;
    tracing::info!(points = layout.len(), seed = umap.seed(), "projected embeddings");

    Ok(meta
        .into_iter()
        .zip(layout)
        .map(|(point, [x, y])| ProjectedPoint {
            x,
            y,
            language: point.language.to_string(),
            concept: point.concept,
            translation: point.translation.to_string(),
            similarity: point.similarity,
        })
        .collect())
}
