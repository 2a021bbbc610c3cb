//! Grouping dimensions and concept slots.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// The axis along which per-language results are grouped.
///
/// ```text
/// family → phylogenetic grouping (e.g., Indo-European)
/// area   → geographic/contact grouping, independent of family
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Family,
    Area,
}

impl Dimension {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Area => "area",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConceptSlot
// ---------------------------------------------------------------------------

/// Which concept of the compared pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConceptSlot {
    First,
    Second,
}

impl ConceptSlot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }

    /// Both slots in flattening order.
    #[must_use]
    pub const fn both() -> [Self; 2] {
        [Self::First, Self::Second]
    }
}

impl fmt::Display for ConceptSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Dimension::Family).unwrap(), "\"family\"");
        assert_eq!(serde_json::to_string(&Dimension::Area).unwrap(), "\"area\"");
    }

    #[test]
    fn concept_slot_display_matches_serde() {
        for slot in ConceptSlot::both() {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{slot}\""));
        }
    }

    #[test]
    fn slots_flatten_first_then_second() {
        assert_eq!(ConceptSlot::both(), [ConceptSlot::First, ConceptSlot::Second]);
    }
}
