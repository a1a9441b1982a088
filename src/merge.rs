//! Override file bisection and parameter merging.
//!
//! Terraform layers `override.tf`-suffixed files on top of the primary
//! module's declarations. This module partitions the filtered file map on
//! that suffix and reconciles the two resulting declaration sets into one
//! de-duplicated parameter list.
//!
//! Field reconciliation follows last-writer-wins-per-field semantics: the
//! default value, type, and description of an override win only when
//! non-empty, while the sensitivity flag *always* takes the override's
//! value, even when that value is `false`. Override files are expected to
//! restate sensitivity explicitly whenever they touch a variable. The
//! asymmetry is intentional; do not normalize it.

use crate::config::Config;
use crate::types::{FileMap, Parameter, VariableDeclaration};

use std::collections::BTreeMap;

/// Partition a file map into primary and override subsets.
///
/// A file belongs to the override partition if and only if its name ends
/// with the configured override suffix (`override.tf` by default, which
/// also matches `prod_override.tf`). Pure partition; never fails. Empty
/// input yields two empty maps.
#[must_use]
pub fn bisect_file_map(config: &Config, files: &FileMap) -> (FileMap, FileMap) {
    let mut primary = FileMap::new();
    let mut overrides = FileMap::new();

    for (name, content) in files {
        if name.ends_with(&config.filter.override_suffix) {
            tracing::debug!(file = %name, "Identified override file");
            overrides.insert(name.clone(), content.clone());
        } else {
            tracing::debug!(file = %name, "Identified primary file");
            primary.insert(name.clone(), content.clone());
        }
    }

    (primary, overrides)
}

/// Merge primary and override variable declarations into the final
/// parameter list.
///
/// Every name present in either map yields exactly one parameter: names
/// in both maps are reconciled field by field, names in only one map pass
/// through unchanged.
#[must_use]
pub fn merge_parameters(
    primary: &BTreeMap<String, VariableDeclaration>,
    overrides: &BTreeMap<String, VariableDeclaration>,
) -> Vec<Parameter> {
    let primary_params: BTreeMap<&str, Parameter> = primary
        .iter()
        .map(|(name, decl)| (name.as_str(), Parameter::from_declaration(decl)))
        .collect();
    let override_params: BTreeMap<&str, Parameter> = overrides
        .iter()
        .map(|(name, decl)| (name.as_str(), Parameter::from_declaration(decl)))
        .collect();

    let mut parameters = Vec::with_capacity(primary_params.len() + override_params.len());

    for (name, override_param) in &override_params {
        match primary_params.get(name) {
            Some(primary_param) => {
                parameters.push(merge_fields(primary_param, override_param));
            }
            None => parameters.push(override_param.clone()),
        }
    }

    for (name, primary_param) in &primary_params {
        if !override_params.contains_key(name) {
            parameters.push(primary_param.clone());
        }
    }

    parameters
}

/// Reconcile one primary parameter with its override.
fn merge_fields(primary: &Parameter, override_param: &Parameter) -> Parameter {
    Parameter {
        key: primary.key.clone(),
        default_value: if override_param.default_value.is_empty() {
            primary.default_value.clone()
        } else {
            override_param.default_value.clone()
        },
        type_expression: if override_param.type_expression.is_empty() {
            primary.type_expression.clone()
        } else {
            override_param.type_expression.clone()
        },
        description: if override_param.description.is_empty() {
            primary.description.clone()
        } else {
            override_param.description.clone()
        },
        // Sensitivity is never defaulted-through: the override wins even
        // when its value is false.
        is_no_echo: override_param.is_no_echo,
    }
}
