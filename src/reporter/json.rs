//! JSON report generator.

use crate::config::Config;
use crate::error::Result;
use crate::reporter::ReportGenerator;
use crate::types::Parameter;
use serde::Serialize;

/// JSON report generator.
pub struct JsonReporter {
    /// Whether to pretty-print the output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            pretty: config.output.pretty,
        }
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, parameters: &[Parameter]) -> Result<String> {
        let report = ParameterReport { parameters };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };

        json.map_err(|e| crate::err!(ReportGeneration {
            message: format!("Failed to serialize JSON report: {e}"),
        }))
    }
}

/// The parameter envelope handed back to the provisioning pipeline.
#[derive(Debug, Serialize)]
pub struct ParameterReport<'a> {
    /// The override-resolved parameter list
    pub parameters: &'a [Parameter],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parameter() -> Parameter {
        Parameter {
            key: "instance_name".to_string(),
            default_value: "my_vm".to_string(),
            type_expression: "string".to_string(),
            description: "Name tag".to_string(),
            is_no_echo: false,
        }
    }

    #[test]
    fn test_json_envelope_shape() {
        let config = Config::default();
        let reporter = JsonReporter::new(&config);

        let json = reporter.generate(&[sample_parameter()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed["parameters"].is_array());
        assert_eq!(parsed["parameters"][0]["key"], "instance_name");
        assert_eq!(parsed["parameters"][0]["defaultValue"], "my_vm");
        assert_eq!(parsed["parameters"][0]["type"], "string");
        assert_eq!(parsed["parameters"][0]["isNoEcho"], false);
    }

    #[test]
    fn test_compact_output() {
        let mut config = Config::default();
        config.output.pretty = false;
        let reporter = JsonReporter::new(&config);

        let json = reporter.generate(&[sample_parameter()]).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_empty_parameter_list() {
        let config = Config::default();
        let reporter = JsonReporter::new(&config);

        let json = reporter.generate(&[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["parameters"].as_array().unwrap().len(), 0);
    }
}
