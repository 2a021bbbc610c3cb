//! Entity structs for the colex domain.
//!
//! Everything here is a value object recomputed from the per-language result
//! set on every comparison, except [`StoredComparisonPoint`], which survives
//! across comparisons in the correlation store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod chain;
mod colexification;
mod comparison;
mod language;
mod stored;

pub use chain::SemanticChain;
pub use colexification::{ColexificationLink, FamilyColexifications};
pub use comparison::{ComparisonResult, LanguageColexification, ResultSet, VariationSimilarity};
pub use language::{LanguageInfo, LanguageTable};
pub use stored::StoredComparisonPoint;
