//! Embedding projector configuration.
//!
//! Only the RNG seed is configurable. Neighborhood size, minimum distance,
//! target dimensions and epoch count are fixed constants of the projector.

use serde::{Deserialize, Serialize};

/// Default projector seed.
const fn default_seed() -> u64 {
    42
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectionConfig {
    /// Seed for layout initialization and negative sampling. The same seed
    /// and input always produce the same layout.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}
