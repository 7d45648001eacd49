//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Strategy search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of casts per branch.
    /// Bounds the depth-first traversal so it always terminates.
    pub max_casts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_casts: 10 }
    }
}

impl SearchConfig {
    /// Create a config with a custom cast limit.
    #[must_use]
    pub fn with_max_casts(mut self, max_casts: usize) -> Self {
        self.max_casts = max_casts;
        self
    }
}
