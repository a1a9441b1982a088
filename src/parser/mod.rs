//! Variable declaration extraction for Terraform configuration files.
//!
//! This module hands file text to the `hcl-rs` crate for syntactic parsing
//! and collects `variable` blocks into a named module. tfparams never
//! interprets HCL grammar itself; it only decides which text blobs to parse
//! and how to reconcile the declarations that come back.
//!
//! # Supported Constructs
//!
//! - `variable` blocks with `type`, `default`, `description`, and
//!   `sensitive` attributes
//!
//! # Example
//!
//! ```rust
//! use tfparams::parser::ModuleBuilder;
//!
//! let mut builder = ModuleBuilder::new("PrimaryModule");
//! builder
//!     .add_file("main.tf", r#"
//! variable "instance_name" {
//!   type    = string
//!   default = "my_vm"
//! }
//! "#)
//!     .unwrap();
//!
//! let variables = builder.finish();
//! assert!(variables.contains_key("instance_name"));
//! ```

mod variables;

pub use variables::ModuleBuilder;

use crate::error::Result;
use crate::types::{FileMap, VariableDeclaration};

use std::collections::BTreeMap;

/// Label for the module accumulated from primary configuration files.
///
/// Labels namespace diagnostic context only; they carry no other
/// semantics.
pub const PRIMARY_MODULE_LABEL: &str = "PrimaryModule";

/// Label for the module accumulated from override configuration files.
pub const OVERRIDE_MODULE_LABEL: &str = "OverrideModule";

/// Parse every file in the map into one logical module and return its
/// declared variables.
///
/// All files in the partition are parsed before variables are extracted;
/// a later file may redeclare a name from an earlier one. Empty input
/// yields an empty mapping, never an error.
///
/// # Errors
///
/// Returns `HclParse` if any individual file fails to parse; the whole
/// extraction fails rather than returning a partial variable set.
pub fn declare_variables(
    files: &FileMap,
    label: &str,
) -> Result<BTreeMap<String, VariableDeclaration>> {
    let mut builder = ModuleBuilder::new(label);

    for (name, content) in files {
        builder.add_file(name, content)?;
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_map_yields_empty_mapping() {
        let variables = declare_variables(&FileMap::new(), PRIMARY_MODULE_LABEL).unwrap();
        assert!(variables.is_empty());
    }

    #[test]
    fn test_declarations_accumulate_across_files() {
        let mut files = FileMap::new();
        files.insert(
            "main.tf".to_string(),
            r#"variable "region" { default = "eu-west-1" }"#.to_string(),
        );
        files.insert(
            "variables.tf".to_string(),
            r#"variable "zone" { default = "a" }"#.to_string(),
        );

        let variables = declare_variables(&files, PRIMARY_MODULE_LABEL).unwrap();
        assert_eq!(variables.len(), 2);
        assert!(variables.contains_key("region"));
        assert!(variables.contains_key("zone"));
    }

    #[test]
    fn test_one_bad_file_fails_the_whole_partition() {
        let mut files = FileMap::new();
        files.insert(
            "main.tf".to_string(),
            r#"variable "region" { default = "eu-west-1" }"#.to_string(),
        );
        files.insert(
            "broken.tf".to_string(),
            "variable \"x\" { this is not valid hcl".to_string(),
        );

        let result = declare_variables(&files, PRIMARY_MODULE_LABEL);
        assert!(matches!(
            result,
            Err(crate::error::TfParamsError::HclParse { .. })
        ));
    }
}
