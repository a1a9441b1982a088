//! Plain text report generator.

use crate::config::Config;
use crate::error::Result;
use crate::reporter::ReportGenerator;
use crate::types::Parameter;
use comfy_table::{ContentArrangement, Table};

/// Text report generator for CLI output.
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter.
    #[must_use]
    pub fn new(_config: &Config) -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, parameters: &[Parameter]) -> Result<String> {
        let mut output = format!(
            "tfparams v{}, {} parameter(s)\n\n",
            env!("CARGO_PKG_VERSION"),
            parameters.len()
        );

        if parameters.is_empty() {
            output.push_str("No parameters declared.\n");
            return Ok(output);
        }

        let mut table = Table::new();
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Key", "Type", "Default", "Description", "NoEcho"]);

        for parameter in parameters {
            table.add_row(vec![
                parameter.key.clone(),
                parameter.type_expression.clone(),
                parameter.default_value.clone(),
                parameter.description.clone(),
                parameter.is_no_echo.to_string(),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');

        Ok(output)
    }
}
