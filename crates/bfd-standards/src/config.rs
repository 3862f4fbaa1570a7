//! Exporter configuration file (TOML).
//!
//! ```toml
//! spec_file = "exporters/cms_field_values.tsv"
//! carrier_file = "payers/carriers.csv"
//! use_first_distribution = false
//! seed = 1234
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use std::path::{Path, PathBuf};

use bfd_model::MappingOptions;
use serde::{Deserialize, Serialize};

use crate::error::StandardsError;
use crate::paths::{default_carrier_path, default_spec_path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExporterConfig {
    #[serde(default = "default_spec_path")]
    pub spec_file: PathBuf,
    #[serde(default = "default_carrier_path")]
    pub carrier_file: PathBuf,
    #[serde(default)]
    pub use_first_distribution: bool,
    /// Overrides the per-person seed of the distribution random source.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            spec_file: default_spec_path(),
            carrier_file: default_carrier_path(),
            use_first_distribution: false,
            seed: None,
        }
    }
}

impl ExporterConfig {
    /// Loads a config file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let mut config: ExporterConfig =
            toml::from_str(&contents).map_err(|e| StandardsError::Toml {
                path: path.to_path_buf(),
                source: e,
            })?;
        if let Some(base) = path.parent() {
            config.spec_file = resolve(base, &config.spec_file);
            config.carrier_file = resolve(base, &config.carrier_file);
        }
        Ok(config)
    }

    pub fn mapping_options(&self) -> MappingOptions {
        MappingOptions::new().with_use_first_distribution(self.use_first_distribution)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exporter.toml");
        std::fs::write(
            &path,
            "spec_file = \"spec.tsv\"\ncarrier_file = \"/abs/carriers.csv\"\nuse_first_distribution = true\n",
        )
        .unwrap();

        let config = ExporterConfig::load(&path).unwrap();
        assert_eq!(config.spec_file, dir.path().join("spec.tsv"));
        assert_eq!(config.carrier_file, PathBuf::from("/abs/carriers.csv"));
        assert!(config.mapping_options().use_first_distribution);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "use_first_distribution = maybe\n").unwrap();
        let err = ExporterConfig::load(&path).unwrap_err();
        assert!(matches!(err, StandardsError::Toml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
