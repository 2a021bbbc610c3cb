//! # colex-core
//!
//! Core types, reference tables, and error types for colex.
//!
//! This crate provides the foundational types shared across all colex crates:
//! - Entity structs for per-language comparison results and colexification data
//! - Grouping dimension and concept slot enums
//! - Concept name normalization
//! - Cross-cutting error types
//! - The bundled language/area reference table
//! - Response types handed to renderers (group summaries, scatter and projection points)

pub mod concepts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod reference;
pub mod responses;
