//! Configuration options for field mapping.

use serde::{Deserialize, Serialize};

/// Options controlling how specification expressions are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingOptions {
    /// Always pick the first alternative of a distribution cell instead of
    /// drawing one from the random source. Used for repeatable test output.
    /// Default: false.
    #[serde(default)]
    pub use_first_distribution: bool,
}

impl MappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use_first_distribution(mut self, enable: bool) -> Self {
        self.use_first_distribution = enable;
        self
    }
}
