//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Fall back to the bundled language/area table when the caller's
    /// language table has no area for a language.
    #[serde(default = "default_true")]
    pub bundled_areas: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bundled_areas: default_true(),
        }
    }
}
