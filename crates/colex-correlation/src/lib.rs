//! # colex-correlation
//!
//! Correlation analytics between embedding similarity and colexification
//! evidence, over a persisted longitudinal dataset.
//!
//! - [`store`]: the load/save/clear persistence substrate (file and memory)
//! - [`tracker`]: idempotent upsert of per-comparison measurements
//! - [`analysis`]: Pearson correlation and scatter plot points

pub mod analysis;
pub mod error;
pub mod store;
pub mod tracker;

pub use analysis::{Correlation, compute_correlation, pearson, scatter_points};
pub use error::CorrelationError;
pub use store::{ComparisonStore, JsonFileStore, MemoryStore};
pub use tracker::{CorrelationTracker, build_point};
