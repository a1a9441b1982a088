//! Error types for tfparams.
//!
//! This module defines the error hierarchy using `thiserror` for proper
//! error handling throughout the crate. All errors include context and can
//! be propagated with the `?` operator.
//!
//! # Error Categories
//!
//! - **Archive errors**: the artifact is not a valid gzip stream, or the
//!   decompressed bytes are not a valid tar stream
//! - **Parse errors**: a configuration file failed to parse as HCL
//! - **Input errors**: no configuration files in the artifact, invalid
//!   configuration values
//! - **Internal errors**: conditions that should not occur in normal
//!   operation
//!
//! Individual archive entries failing the membership filter are *not*
//! errors; they are skipped during extraction and never surface here.
//!
//! # Example
//!
//! ```rust
//! use tfparams::error::{Result, TfParamsError};
//!
//! fn read_archive(path: &str) -> Result<Vec<u8>> {
//!     std::fs::read(path).map_err(|e| TfParamsError::Io {
//!         path: path.into(),
//!         source: e,
//!         src_path: file!(),
//!         src_line: line!(),
//!     })
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Macro to create errors with automatic source location tracking.
///
/// Usage:
/// ```ignore
/// return Err(err!(ArchiveFormat { message: "truncated header".to_string() }));
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::error::TfParamsError::$variant {
            $($field: $value,)*
            src_path: file!(),
            src_line: line!(),
        }
    };
}

/// A specialized Result type for tfparams operations.
pub type Result<T> = std::result::Result<T, TfParamsError>;

/// The main error type for tfparams.
///
/// This enum covers all error conditions that can occur during archive
/// extraction, declaration parsing, merging, and reporting.
#[derive(Error, Debug)]
pub enum TfParamsError {
    /// I/O error with path context.
    #[error("I/O error at '{path}' ({src_path}:{src_line}): {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// The artifact is not a valid gzip-compressed tar stream.
    #[error("Artifact is not a valid tar.gz archive ({src_path}:{src_line}): {message}")]
    ArchiveFormat {
        /// Error message from the decompression/demux step
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// A configuration file failed to parse as HCL.
    #[error("Failed to parse '{file}' in {module} as HCL ({src_path}:{src_line}): {message}")]
    HclParse {
        /// The archive entry name of the file being parsed
        file: String,
        /// The module label the file was being accumulated into
        module: String,
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// The filtered archive contained no configuration files at all.
    #[error(
        "No .tf files found. Nothing to parse. Make sure the root directory of the \
         Terraform open source configuration file contains the .tf files for the \
         root module. ({src_path}:{src_line})"
    )]
    NoConfigurationFiles {
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Configuration parsing error.
    #[error("Failed to parse configuration ({src_path}:{src_line}): {message}")]
    ConfigParse {
        /// Error message
        message: String,
        /// The underlying error (if any)
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Report generation error.
    #[error("Failed to generate report ({src_path}:{src_line}): {message}")]
    ReportGeneration {
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Internal error (should not happen in normal operation).
    #[error("Internal error ({src_path}:{src_line}): {message}")]
    Internal {
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },
}

impl TfParamsError {
    /// Creates an `Io` error.
    #[must_use]
    pub fn io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
        src_path: &'static str,
        src_line: u32,
    ) -> Self {
        Self::Io {
            path: path.into(),
            source,
            src_path,
            src_line,
        }
    }

    /// Creates a `ConfigParse` error.
    #[must_use]
    pub fn config_parse(
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        src_path: &'static str,
        src_line: u32,
    ) -> Self {
        Self::ConfigParse {
            message,
            source,
            src_path,
            src_line,
        }
    }

    /// Whether this error is a caller-visible input problem.
    ///
    /// Input errors are not retryable without changing the artifact or the
    /// configuration: the archive bytes are broken, a file is not valid
    /// HCL, or the bundle carries no configuration files at all.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ArchiveFormat { .. }
                | Self::HclParse { .. }
                | Self::NoConfigurationFiles { .. }
                | Self::ConfigParse { .. }
        )
    }

    /// Returns the appropriate process exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                13
            }
            Self::ArchiveFormat { .. } => 16,
            Self::HclParse { .. } => 17,
            Self::NoConfigurationFiles { .. } => 18,
            Self::ConfigParse { .. } => 19,
            Self::ReportGeneration { .. } => 20,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for TfParamsError {
    fn from(source: std::io::Error) -> Self {
        // Used when a PathBuf is not readily available. When a path is
        // known, prefer TfParamsError::io(path, source, file!(), line!()).
        Self::Io {
            path: PathBuf::new(),
            source,
            src_path: file!(),
            src_line: line!(),
        }
    }
}

impl From<serde_json::Error> for TfParamsError {
    fn from(source: serde_json::Error) -> Self {
        Self::Internal {
            message: format!("JSON serialization/deserialization error: {source}"),
            src_path: file!(),
            src_line: line!(),
        }
    }
}
