//! `variable` block extraction using the `hcl-rs` crate.

use crate::error::Result;
use crate::types::VariableDeclaration;

use hcl::{Block, Body, Expression};
use std::collections::BTreeMap;

/// Accumulates variable declarations from configuration files into one
/// named module.
///
/// Files are fed in one at a time with [`add_file`](Self::add_file);
/// [`finish`](Self::finish) returns the collected declarations. A name
/// redeclared by a later file replaces the earlier declaration. The label
/// only namespaces diagnostics.
pub struct ModuleBuilder {
    label: String,
    variables: BTreeMap<String, VariableDeclaration>,
}

impl ModuleBuilder {
    /// Create an empty module with the given diagnostic label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Parse one file's text and merge its variable declarations into the
    /// module.
    ///
    /// # Errors
    ///
    /// Returns `HclParse` if the content is not valid HCL.
    pub fn add_file(&mut self, file_name: &str, content: &str) -> Result<()> {
        tracing::debug!(module = %self.label, file = %file_name, "Parsing file as HCL");

        let body: Body = hcl::from_str(content).map_err(|e| crate::err!(HclParse {
            file: file_name.to_string(),
            module: self.label.clone(),
            message: e.to_string(),
        }))?;

        for structure in body.into_inner() {
            if let hcl::Structure::Block(block) = structure {
                if block.identifier.as_str() != "variable" {
                    // Ignore other block types (resource, output, etc.)
                    continue;
                }

                match parse_variable_block(&block) {
                    Some(decl) => {
                        self.variables.insert(decl.name.clone(), decl);
                    }
                    None => {
                        tracing::warn!(
                            module = %self.label,
                            file = %file_name,
                            "Variable block missing name label"
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Return the declared variables, keyed by name.
    #[must_use]
    pub fn finish(self) -> BTreeMap<String, VariableDeclaration> {
        tracing::debug!(
            module = %self.label,
            variables = self.variables.len(),
            "Module accumulation complete"
        );
        self.variables
    }
}

/// Parse a variable block into a `VariableDeclaration`.
fn parse_variable_block(block: &Block) -> Option<VariableDeclaration> {
    let name = block.labels.first().map(|l| l.as_str().to_string())?;

    let mut decl = VariableDeclaration::named(name);

    for attr in block.body.attributes() {
        match attr.key.as_str() {
            "type" => decl.type_expression = type_expression_to_string(&attr.expr),
            "default" => decl.default = Some(hcl::Value::from(attr.expr.clone())),
            "description" => {
                if let Some(description) = expression_to_string(&attr.expr) {
                    decl.description = description;
                }
            }
            "sensitive" => {
                if let Expression::Bool(sensitive) = &attr.expr {
                    decl.sensitive = *sensitive;
                }
            }
            _ => {
                // validation, nullable, etc. are not surfaced as parameters
            }
        }
    }

    Some(decl)
}

/// Render a declared type expression back to its source string form.
fn type_expression_to_string(expr: &Expression) -> String {
    match expr {
        // Legacy quoted form: type = "string"
        Expression::String(s) => s.clone(),
        other => hcl::format::to_string(other).unwrap_or_default(),
    }
}

/// Convert a scalar expression to a string if possible.
fn expression_to_string(expr: &Expression) -> Option<String> {
    match expr {
        Expression::String(s) => Some(s.clone()),
        Expression::Number(n) => Some(n.to_string()),
        Expression::Bool(b) => Some(b.to_string()),
        Expression::TemplateExpr(t) => {
            // Keep the literal parts of heredoc and template strings;
            // no template evaluation.
            Some(format!("{t:?}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_variable_block() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file(
                "variables.tf",
                r#"
variable "instance_name" {
  type        = string
  default     = "my_vm"
  description = "Name tag for the instance"
  sensitive   = false
}
"#,
            )
            .unwrap();

        let variables = builder.finish();
        let decl = &variables["instance_name"];
        assert_eq!(decl.type_expression, "string");
        assert_eq!(
            decl.default,
            Some(hcl::Value::String("my_vm".to_string()))
        );
        assert_eq!(decl.description, "Name tag for the instance");
        assert!(!decl.sensitive);
    }

    #[test]
    fn test_parse_collection_type_expression() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file(
                "variables.tf",
                r#"
variable "availability_zones" {
  type    = list(string)
  default = ["a", "b"]
}
"#,
            )
            .unwrap();

        let variables = builder.finish();
        let decl = &variables["availability_zones"];
        assert_eq!(decl.type_expression, "list(string)");
    }

    #[test]
    fn test_parse_legacy_quoted_type() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file("variables.tf", r#"variable "name" { type = "string" }"#)
            .unwrap();

        let variables = builder.finish();
        assert_eq!(variables["name"].type_expression, "string");
    }

    #[test]
    fn test_undeclared_fields_stay_empty() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file("variables.tf", r#"variable "bare" {}"#)
            .unwrap();

        let variables = builder.finish();
        let decl = &variables["bare"];
        assert_eq!(decl.type_expression, "");
        assert_eq!(decl.default, None);
        assert_eq!(decl.description, "");
        assert!(!decl.sensitive);
    }

    #[test]
    fn test_sensitive_flag() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file(
                "variables.tf",
                r#"variable "db_password" { sensitive = true }"#,
            )
            .unwrap();

        let variables = builder.finish();
        assert!(variables["db_password"].sensitive);
    }

    #[test]
    fn test_heredoc_description_is_kept() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file(
                "variables.tf",
                "variable \"notes\" {\n  description = <<EOT\nmulti-line description\nEOT\n}\n",
            )
            .unwrap();

        let variables = builder.finish();
        assert!(variables["notes"]
            .description
            .contains("multi-line description"));
    }

    #[test]
    fn test_redeclaration_last_file_wins() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file("a.tf", r#"variable "region" { default = "eu-west-1" }"#)
            .unwrap();
        builder
            .add_file("b.tf", r#"variable "region" { default = "us-east-1" }"#)
            .unwrap();

        let variables = builder.finish();
        assert_eq!(
            variables["region"].default,
            Some(hcl::Value::String("us-east-1".to_string()))
        );
    }

    #[test]
    fn test_non_variable_blocks_are_ignored() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        builder
            .add_file(
                "main.tf",
                r#"
resource "aws_instance" "web" {
  ami = "ami-123456"
}

output "ip" {
  value = "10.0.0.1"
}

variable "region" {}
"#,
            )
            .unwrap();

        let variables = builder.finish();
        assert_eq!(variables.len(), 1);
        assert!(variables.contains_key("region"));
    }

    #[test]
    fn test_invalid_hcl_is_fatal() {
        let mut builder = ModuleBuilder::new("PrimaryModule");
        let result = builder.add_file("broken.tf", "variable { not valid");

        assert!(matches!(
            result,
            Err(crate::error::TfParamsError::HclParse { .. })
        ));
    }
}
