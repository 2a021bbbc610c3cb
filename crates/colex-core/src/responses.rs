//! Shapes handed to renderers.
//!
//! Group summaries feed the per-group comparison panels and bar charts,
//! scatter points feed the correlation plot, and projected points feed the
//! 2D embedding map.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::concepts::ConceptPair;
use crate::enums::{ConceptSlot, Dimension};

/// Per-group comparison panel values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GroupSummary {
    pub name: String,
    pub dimension: Dimension,
    /// Mean of member similarities, in percent.
    pub average_similarity: f64,
    /// Direct colexification frequency over total languages.
    pub direct_rate: f64,
    /// Direct rate extended with decayed chain evidence, in `[0, 1]`.
    pub enhanced_score: f64,
    pub chain_count: usize,
    pub language_count: usize,
}

/// One point of the embedding-vs-colexification scatter plot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScatterPoint {
    pub concepts: ConceptPair,
    /// Mean embedding similarity over the point's active families.
    pub embedding_similarity: f64,
    /// Mean enhanced colexification score over the point's active families.
    pub colexification_score: f64,
    pub coverage: f64,
    pub active_families: usize,
    /// Families stored with the point.
    pub total_families: usize,
    pub timestamp: DateTime<Utc>,
}

/// One translated word placed in the shared 2D embedding frame.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Source language code.
    pub language: String,
    pub concept: ConceptSlot,
    pub translation: String,
    /// The language's main similarity, shared by both points of the pair.
    pub similarity: f64,
}
