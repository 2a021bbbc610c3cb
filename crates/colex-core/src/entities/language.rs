use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static reference data for one language. Immutable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Display name (e.g., "English").
    pub name: String,
    /// Phylogenetic family (e.g., "Indo-European").
    pub family: String,
    /// Geographic/contact area. When absent, area membership falls back to
    /// the bundled table in [`crate::reference`].
    #[serde(default)]
    pub area: Option<String>,
}

/// Language code (ISO 639-3) to reference data.
pub type LanguageTable = BTreeMap<String, LanguageInfo>;
