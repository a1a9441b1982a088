//! Report generation module.
//!
//! This module renders an extracted parameter list in multiple formats:
//! - JSON: the machine-readable `{"parameters": [...]}` envelope consumed
//!   by the provisioning pipeline
//! - Text: a human-readable table for CLI use
//!
//! # Example
//!
//! ```rust
//! use tfparams::reporter::Reporter;
//! use tfparams::types::ReportFormat;
//! use tfparams::Config;
//!
//! let config = Config::default();
//! let reporter = Reporter::new(&config);
//!
//! let json = reporter.generate(&[], ReportFormat::Json).unwrap();
//! assert!(json.contains("parameters"));
//! ```

mod json;
mod text;

use crate::config::Config;
use crate::error::Result;
use crate::types::{Parameter, ReportFormat};

pub use json::JsonReporter;
pub use text::TextReporter;

/// Report generator that supports multiple output formats.
pub struct Reporter {
    config: Config,
}

impl Reporter {
    /// Create a new reporter with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Generate a report in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if report generation fails.
    pub fn generate(&self, parameters: &[Parameter], format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => JsonReporter::new(&self.config).generate(parameters),
            ReportFormat::Text => TextReporter::new(&self.config).generate(parameters),
        }
    }
}

/// Trait for report generators.
pub trait ReportGenerator {
    /// Generate a report from a parameter list.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails.
    fn generate(&self, parameters: &[Parameter]) -> Result<String>;
}
