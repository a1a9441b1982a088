//! Core data types used throughout tfparams.
//!
//! This module defines the fundamental data structures for representing:
//! - The filtered file map produced from an archive
//! - Variable declarations extracted from HCL
//! - The final override-resolved parameters
//! - Report formats

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from archive entry name to decoded file content.
///
/// Keys are the literal entry names as stored in the archive, including
/// any `./` prefix: `main.tf` and `./main.tf` are distinct keys. The map
/// is logically a set of (name, content) pairs; `BTreeMap` makes
/// iteration deterministic for a given archive.
pub type FileMap = BTreeMap<String, String>;

/// A declared input variable, as extracted from a module's HCL.
///
/// # Example HCL
///
/// ```hcl
/// variable "instance_name" {
///   type        = string
///   default     = "my_vm"
///   description = "Name tag for the instance"
///   sensitive   = false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// The variable name (unique within a module)
    pub name: String,

    /// String form of the declared type expression (empty if undeclared)
    pub type_expression: String,

    /// The declared default value, if any
    pub default: Option<hcl::Value>,

    /// The declared description (empty if undeclared)
    pub description: String,

    /// Whether the variable is marked sensitive
    pub sensitive: bool,
}

impl VariableDeclaration {
    /// Create a declaration with only a name; the remaining fields carry
    /// their undeclared forms.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expression: String::new(),
            default: None,
            description: String::new(),
            sensitive: false,
        }
    }
}

/// A single override-resolved parameter, the final output record.
///
/// Field names serialize in the wire shape the provisioning pipeline
/// expects: `key`, `defaultValue`, `type`, `description`, `isNoEcho`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The variable name
    pub key: String,

    /// Canonical string form of the default value (empty if undeclared)
    pub default_value: String,

    /// String form of the declared type expression
    #[serde(rename = "type")]
    pub type_expression: String,

    /// The declared description
    pub description: String,

    /// Whether downstream tooling must not display the value in plaintext
    pub is_no_echo: bool,
}

impl Parameter {
    /// Convert a variable declaration into a parameter, canonicalizing
    /// the default value.
    #[must_use]
    pub fn from_declaration(decl: &VariableDeclaration) -> Self {
        Self {
            key: decl.name.clone(),
            default_value: canonical_default(decl.default.as_ref()),
            type_expression: decl.type_expression.clone(),
            description: decl.description.clone(),
            is_no_echo: decl.sensitive,
        }
    }
}

/// Canonicalize a declared default value into its string form.
///
/// An absent default (or an explicit HCL `null`) canonicalizes to the
/// empty string. A top-level scalar string renders as the bare string,
/// without surrounding quotes. Everything else renders in compact JSON
/// form with object keys sorted.
#[must_use]
pub fn canonical_default(value: Option<&hcl::Value>) -> String {
    match value {
        None | Some(hcl::Value::Null) => String::new(),
        Some(value) => match serde_json::to_value(value) {
            // A quoted scalar loses its quotes; `{"k":"v"}` and `["a"]`
            // keep their serialized form.
            Ok(serde_json::Value::String(s)) => s,
            Ok(json) => json.to_string(),
            Err(e) => {
                // Unreachable for parsed HCL values. A value the JSON
                // marshaller rejects contributes no default text, the same
                // as an undeclared default; the verbatim fallback in the
                // arm above covers the no-quotes-to-strip case.
                tracing::warn!(error = %e, "default value is not JSON-representable");
                String::new()
            }
        },
    }
}

/// Output format for generated reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable table
    Text,
    /// JSON parameter envelope
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_default_is_empty() {
        assert_eq!(canonical_default(None), "");
    }

    #[test]
    fn test_null_default_is_empty() {
        assert_eq!(canonical_default(Some(&hcl::Value::Null)), "");
    }

    #[test]
    fn test_string_default_loses_quotes() {
        let value = hcl::Value::String("hello world".to_string());
        assert_eq!(canonical_default(Some(&value)), "hello world");
    }

    #[test]
    fn test_scalar_defaults() {
        let number = hcl::Value::Number(hcl::Number::from(42));
        assert_eq!(canonical_default(Some(&number)), "42");
        assert_eq!(canonical_default(Some(&hcl::Value::Bool(true))), "true");
    }

    #[test]
    fn test_list_default_keeps_compact_json() {
        let value = hcl::Value::Array(vec![
            hcl::Value::String("a".to_string()),
            hcl::Value::String("b".to_string()),
        ]);
        assert_eq!(canonical_default(Some(&value)), r#"["a","b"]"#);
    }

    #[test]
    fn test_object_default_sorts_keys() {
        let body: hcl::Body = hcl::from_str(
            r#"default = { name = "default_name", create_rg = true, location = "default_location" }"#,
        )
        .unwrap();
        let expr = body
            .into_inner()
            .into_iter()
            .find_map(|s| match s {
                hcl::Structure::Attribute(a) => Some(a.expr),
                hcl::Structure::Block(_) => None,
            })
            .unwrap();
        let value = hcl::Value::from(expr);

        assert_eq!(
            canonical_default(Some(&value)),
            r#"{"create_rg":true,"location":"default_location","name":"default_name"}"#
        );
    }

    #[test]
    fn test_parameter_wire_field_names() {
        let parameter = Parameter {
            key: "instance_name".to_string(),
            default_value: "my_vm".to_string(),
            type_expression: "string".to_string(),
            description: String::new(),
            is_no_echo: true,
        };

        let json = serde_json::to_value(&parameter).unwrap();
        assert_eq!(json["key"], "instance_name");
        assert_eq!(json["defaultValue"], "my_vm");
        assert_eq!(json["type"], "string");
        assert_eq!(json["isNoEcho"], true);
    }

    #[test]
    fn test_from_declaration() {
        let mut decl = VariableDeclaration::named("bucket");
        decl.type_expression = "string".to_string();
        decl.default = Some(hcl::Value::String("artifacts".to_string()));
        decl.sensitive = true;

        let parameter = Parameter::from_declaration(&decl);
        assert_eq!(parameter.key, "bucket");
        assert_eq!(parameter.default_value, "artifacts");
        assert_eq!(parameter.type_expression, "string");
        assert!(parameter.is_no_echo);
    }
}
