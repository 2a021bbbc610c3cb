//! # colex-analytics
//!
//! Turns a flat per-language comparison result set into grouped analytics.
//!
//! - [`grouping`]: family and area aggregation behind [`GroupingStrategy`]
//! - [`scoring`]: direct rate and chain-enhanced colexification score
//! - [`summary`]: per-group panel values
//! - [`pipeline`]: provider-driven comparison runs feeding correlation tracking

pub mod error;
pub mod grouping;
pub mod pipeline;
pub mod scoring;
pub mod summary;

pub use error::AnalyticsError;
pub use grouping::{
    AggregatedGroup, AreaStrategy, EmbeddingEntry, FamilyStrategy, GroupingStrategy,
    area_membership, family_membership, group_by_dimension,
};
pub use pipeline::{ChainProvider, ComparisonPipeline, ComparisonReport, ResultProvider};
pub use scoring::{CHAIN_DECAY, chain_weight, direct_rate, enhanced_score};
pub use summary::summarize;
