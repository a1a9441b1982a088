//! Configuration module for tfparams.
//!
//! This module handles loading and validating configuration from:
//! - YAML configuration files (`tfparams.yaml`)
//! - CLI arguments
//!
//! The `filter` section is the membership policy applied when selecting
//! root-module files from an archive. The defaults reproduce the
//! conventions common archiving tools use for "the root of the bundle";
//! they rarely need to change.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # tfparams.yaml
//!
//! # Archive membership policy
//! filter:
//!   configuration_suffix: ".tf"
//!   override_suffix: "override.tf"
//!   metadata_prefixes:
//!     - "./._"
//!     - "._"
//!   root_prefix: "./"
//!   path_separator: "/"
//!
//! # Output options
//! output:
//!   pretty: true
//! ```

use crate::error::{Result, TfParamsError};
use serde::{Deserialize, Serialize};

/// Archive membership policy.
///
/// These values drive both the archive filter (which entries count as
/// root-module configuration files) and the bisector (which files are
/// override files).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Suffix a file name must carry to count as a configuration file.
    pub configuration_suffix: String,

    /// Suffix that routes a configuration file into the override partition.
    pub override_suffix: String,

    /// Name prefixes denoting non-content sidecar metadata (e.g. the
    /// AppleDouble files macOS `tar` emits). Matching entries are skipped
    /// even though they end with the configuration suffix.
    pub metadata_prefixes: Vec<String>,

    /// The root-directory marker some archivers prepend to entry names.
    pub root_prefix: String,

    /// Path separator used for the depth rules.
    pub path_separator: char,
}

impl FilterOptions {
    /// Minimum length of an entry name that can carry the configuration
    /// suffix plus at least one base character.
    #[must_use]
    pub fn min_name_len(&self) -> usize {
        self.configuration_suffix.len() + 1
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            configuration_suffix: ".tf".to_string(),
            override_suffix: "override.tf".to_string(),
            metadata_prefixes: vec!["./._".to_string(), "._".to_string()],
            root_prefix: "./".to_string(),
            path_separator: '/',
        }
    }
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Main configuration structure with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Archive membership policy
    pub filter: FilterOptions,

    /// Output options
    pub output: OutputOptions,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(content: &str) -> Result<Self> {
        tracing::debug!("Parsing configuration from YAML");

        let config: Config =
            serde_yaml::from_str(content).map_err(|e| TfParamsError::ConfigParse {
                message: e.to_string(),
                source: None,
                src_path: file!(),
                src_line: line!(),
            })?;

        tracing::debug!(
            configuration_suffix = %config.filter.configuration_suffix,
            override_suffix = %config.filter.override_suffix,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Generate an example YAML configuration.
    #[must_use]
    pub fn example_yaml() -> String {
        r#"# Tfparams Configuration File
# https://github.com/tfparams/tfparams

# Archive membership policy
filter:
  # Suffix a file must carry to count as root-module configuration
  configuration_suffix: ".tf"

  # Suffix that routes a file into the override partition
  override_suffix: "override.tf"

  # Name prefixes denoting archiver-generated sidecar metadata
  metadata_prefixes:
    - "./._"
    - "._"

  # Root-directory marker some archivers prepend to entry names
  root_prefix: "./"

  # Path separator used for the depth rules
  path_separator: "/"

# Output options
output:
  # Pretty-print JSON output
  pretty: true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filter.configuration_suffix, ".tf");
        assert_eq!(config.filter.override_suffix, "override.tf");
        assert_eq!(config.filter.metadata_prefixes, vec!["./._", "._"]);
        assert_eq!(config.filter.root_prefix, "./");
        assert_eq!(config.filter.path_separator, '/');
        assert!(config.output.pretty);
    }

    #[test]
    fn test_min_name_len() {
        let filter = FilterOptions::default();
        // ".tf" plus at least one base character
        assert_eq!(filter.min_name_len(), 4);
    }

    #[test]
    fn test_config_loading() {
        let yaml = r#"
filter:
  override_suffix: "_override.tf"
output:
  pretty: false
"#;

        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.filter.override_suffix, "_override.tf");
        // Untouched sections keep their defaults
        assert_eq!(config.filter.configuration_suffix, ".tf");
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_yaml("filter: [not, a, map]");
        assert!(result.is_err());
    }

    #[test]
    fn test_example_yaml_parses() {
        let config = Config::from_yaml(&Config::example_yaml()).unwrap();
        assert_eq!(config.filter.configuration_suffix, ".tf");
    }
}
