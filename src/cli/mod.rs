//! Command-line interface module.
//!
//! This module defines the CLI structure using Clap, including
//! all commands, arguments, and options.
//!
//! # Commands
//!
//! - `parse`: Extract parameters from a root-module archive
//! - `init`: Create an example configuration file
//! - `validate`: Validate a configuration file
//!
//! # Example Usage
//!
//! ```bash
//! # Extract parameters from a bundle
//! tfparams parse module.tar.gz
//!
//! # Machine-readable output for the provisioning pipeline
//! tfparams parse module.tar.gz --format json --output parameters.json
//!
//! # Initialize configuration
//! tfparams init
//!
//! # Validate configuration
//! tfparams validate tfparams.yaml
//! ```

use crate::types::ReportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tfparams - Terraform root-module input variable extractor.
#[derive(Parser, Debug)]
#[command(
    name = "tfparams",
    author,
    version,
    about = "Terraform root-module input variable extractor with override resolution",
    long_about = "tfparams decompresses a Terraform configuration bundle (.tar.gz), \
                  selects the root module's configuration files, parses their variable \
                  declarations, and resolves override files into a flat parameter list."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "TFPARAMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract parameters from a root-module archive
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Create an example configuration file
    Init,

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for the parse command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Path to the gzip-compressed tar archive of the root module
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "json", value_enum)]
    pub format: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(value_name = "FILE", default_value = "tfparams.yaml")]
    pub config: PathBuf,
}
