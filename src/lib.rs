//! # tfparams
//!
//! A Terraform root-module input variable extractor with override
//! resolution.
//!
//! tfparams takes a gzip-compressed tar archive of a Terraform root
//! module, selects the configuration files that belong to the module's
//! root directory, parses their `variable` declarations, and reconciles
//! primary files with `override.tf`-suffixed files into one flat,
//! de-duplicated parameter list for a provisioning pipeline.
//!
//! ## Pipeline
//!
//! 1. **Archive filtering**: decompress and walk the tar stream, keeping
//!    only regular top-level `.tf` files (archiver sidecar metadata and
//!    subdirectories are skipped silently)
//! 2. **Bisection**: partition the file map into primary and override
//!    subsets on the `override.tf` filename suffix
//! 3. **Declaration extraction**: parse each partition into one logical
//!    module via `hcl-rs`
//! 4. **Merge**: resolve overrides field by field into the final
//!    `Parameter` list
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfparams::{Config, Extractor};
//!
//! fn main() -> anyhow::Result<()> {
//!     let archive = std::fs::read("module.tar.gz")?;
//!
//!     let extractor = Extractor::new(Config::default());
//!     let parameters = extractor.extract_parameters(&archive)?;
//!
//!     for parameter in &parameters {
//!         println!("{}: {}", parameter.key, parameter.default_value);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, missing_docs, rust_2018_idioms)]

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod parser;
pub mod reporter;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{Result, TfParamsError};
pub use types::{FileMap, Parameter, ReportFormat, VariableDeclaration};

use archive::ArchiveFilter;
use merge::{bisect_file_map, merge_parameters};
use parser::{declare_variables, OVERRIDE_MODULE_LABEL, PRIMARY_MODULE_LABEL};

/// Main orchestrator coordinating the extraction pipeline.
///
/// The `Extractor` is the primary entry point for using tfparams as a
/// library. Each invocation is independent and idempotent: the same
/// archive bytes always yield the same parameter set.
///
/// # Example
///
/// ```rust
/// use tfparams::{Config, Extractor, FileMap};
///
/// let extractor = Extractor::new(Config::default());
///
/// let mut files = FileMap::new();
/// files.insert(
///     "main.tf".to_string(),
///     r#"variable "region" { default = "eu-west-1" }"#.to_string(),
/// );
///
/// let parameters = extractor.parse_file_map(&files).unwrap();
/// assert_eq!(parameters[0].key, "region");
/// ```
pub struct Extractor {
    config: Config,
}

impl Extractor {
    /// Create a new extractor with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Extract the override-resolved parameter list from archive bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The bytes are not a valid gzip-compressed tar stream
    /// - The archive contains no configuration files
    /// - Any configuration file fails to parse as HCL
    pub fn extract_parameters(&self, archive: &[u8]) -> Result<Vec<Parameter>> {
        let filter = ArchiveFilter::new(&self.config);
        let files = filter.extract(archive)?;

        self.parse_file_map(&files)
    }

    /// Run the post-archive pipeline on an already-filtered file map.
    ///
    /// # Errors
    ///
    /// Returns `NoConfigurationFiles` if the map is empty, before any
    /// bisection or parsing is attempted, and `HclParse` if a file in
    /// either partition is not valid HCL.
    pub fn parse_file_map(&self, files: &FileMap) -> Result<Vec<Parameter>> {
        if files.is_empty() {
            return Err(crate::err!(NoConfigurationFiles {}));
        }

        let (primary_files, override_files) = bisect_file_map(&self.config, files);

        let primary = declare_variables(&primary_files, PRIMARY_MODULE_LABEL)?;
        let overrides = declare_variables(&override_files, OVERRIDE_MODULE_LABEL)?;

        tracing::info!(
            primary = primary.len(),
            overrides = overrides.len(),
            "Declaration extraction complete"
        );

        Ok(merge_parameters(&primary, &overrides))
    }
}
