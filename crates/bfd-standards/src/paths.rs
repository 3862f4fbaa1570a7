//! Bundled resource path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the resources directory.
pub const RESOURCES_ENV_VAR: &str = "BFD_RESOURCES_DIR";

/// Get the resources root directory.
///
/// Resolution order:
/// 1. `BFD_RESOURCES_DIR` environment variable
/// 2. `resources/` directory relative to workspace root
pub fn resources_root() -> PathBuf {
    if let Ok(root) = std::env::var(RESOURCES_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}

/// Bundled field-value specification.
pub fn default_spec_path() -> PathBuf {
    resources_root().join("exporters/cms_field_values.tsv")
}

/// Bundled carrier lookup table.
pub fn default_carrier_path() -> PathBuf {
    resources_root().join("payers/carriers.csv")
}
