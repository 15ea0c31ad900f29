use log::{debug, error, info};
use tokio::fs;

use crate::contract::OperationSpec;
use crate::error::ContractError;

/// Parser for operation definitions in JSON and YAML formats.
///
/// Parsing and compilation are deliberately separate steps: a parsed
/// [`OperationSpec`] is plain data and carries no compiled validators.
pub struct ContractParser;

impl ContractParser {
    /// Parse an operation definition from a JSON string.
    pub fn from_json(json_str: &str) -> Result<OperationSpec, ContractError> {
        Self::from_json_with_context(json_str, None)
    }

    /// Parse an operation definition from a JSON string with file context.
    pub fn from_json_with_context(
        json_str: &str,
        file_path: Option<&str>,
    ) -> Result<OperationSpec, ContractError> {
        let context = file_path
            .map(|p| format!(" (file: {})", p))
            .unwrap_or_default();
        debug!(
            "Parsing operation definition from JSON{} ({} bytes)",
            context,
            json_str.len()
        );

        if json_str.trim().is_empty() {
            error!("Operation definition JSON is empty{}", context);
            return Err(ContractError::Parse(format!(
                "JSON parsing error{}: input string is empty",
                context
            )));
        }

        match serde_json::from_str::<OperationSpec>(json_str) {
            Ok(operation) => {
                info!("Parsed operation definition from JSON{}", context);
                debug!(
                    "Operation '{}': {} parameters, {} responses",
                    operation.operation_id.as_deref().unwrap_or("<anonymous>"),
                    operation.parameters.len(),
                    operation.responses.len()
                );
                Ok(operation)
            }
            Err(e) => {
                error!("Failed to parse operation definition{}: {}", context, e);
                let detailed = match e.classify() {
                    serde_json::error::Category::Syntax => format!(
                        "JSON parsing error{} - syntax error at line {}, column {}: {}",
                        context,
                        e.line(),
                        e.column(),
                        e
                    ),
                    serde_json::error::Category::Data => format!(
                        "JSON parsing error{} - invalid operation structure: {}",
                        context, e
                    ),
                    serde_json::error::Category::Eof => format!(
                        "JSON parsing error{} - unexpected end of input: {}",
                        context, e
                    ),
                    serde_json::error::Category::Io => {
                        format!("JSON parsing error{} - I/O issue: {}", context, e)
                    }
                };
                Err(ContractError::Parse(detailed))
            }
        }
    }

    /// Parse an operation definition from a YAML string.
    #[cfg(feature = "yaml-support")]
    pub fn from_yaml(yaml_str: &str) -> Result<OperationSpec, ContractError> {
        Self::from_yaml_with_context(yaml_str, None)
    }

    /// Parse an operation definition from a YAML string with file context.
    #[cfg(feature = "yaml-support")]
    pub fn from_yaml_with_context(
        yaml_str: &str,
        file_path: Option<&str>,
    ) -> Result<OperationSpec, ContractError> {
        let context = file_path
            .map(|p| format!(" (file: {})", p))
            .unwrap_or_default();
        debug!(
            "Parsing operation definition from YAML{} ({} bytes)",
            context,
            yaml_str.len()
        );

        if yaml_str.trim().is_empty() {
            error!("Operation definition YAML is empty{}", context);
            return Err(ContractError::Parse(format!(
                "YAML parsing error{}: input string is empty",
                context
            )));
        }

        match serde_yaml::from_str::<OperationSpec>(yaml_str) {
            Ok(operation) => {
                info!("Parsed operation definition from YAML{}", context);
                Ok(operation)
            }
            Err(e) => {
                error!("Failed to parse operation definition{}: {}", context, e);
                let detailed = if let Some(location) = e.location() {
                    format!(
                        "YAML parsing error{} at line {}, column {}: {}",
                        context,
                        location.line(),
                        location.column(),
                        e
                    )
                } else {
                    format!("YAML parsing error{}: {}", context, e)
                };
                Err(ContractError::Parse(detailed))
            }
        }
    }

    /// Load an operation definition from a file, dispatching on extension.
    ///
    /// `.json` files are always supported; `.yaml`/`.yml` require the
    /// `yaml-support` feature.
    pub async fn from_file(path: &str) -> Result<OperationSpec, ContractError> {
        debug!("Loading operation definition from file: {}", path);
        let content = fs::read_to_string(path).await?;

        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match extension {
            "json" => Self::from_json_with_context(&content, Some(path)),
            #[cfg(feature = "yaml-support")]
            "yaml" | "yml" => Self::from_yaml_with_context(&content, Some(path)),
            #[cfg(not(feature = "yaml-support"))]
            "yaml" | "yml" => Err(ContractError::Parse(format!(
                "YAML support is not enabled (file: {}); rebuild with the yaml-support feature",
                path
            ))),
            other => Err(ContractError::Parse(format!(
                "unsupported contract file extension '{}' (file: {})",
                other, path
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_minimal_operation() {
        let operation = ContractParser::from_json(
            r#"{"responses": {"200": {"description": "ok"}}}"#,
        )
        .unwrap();
        assert!(operation.parameters.is_empty());
        assert!(operation.request_body.is_none());
        assert_eq!(operation.responses.len(), 1);
    }

    #[test]
    fn test_from_json_empty_input() {
        let err = ContractParser::from_json("   ").unwrap_err();
        assert!(matches!(err, ContractError::Parse(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_from_json_syntax_error_reports_position() {
        let err = ContractParser::from_json("{\"responses\": {").unwrap_err();
        assert!(matches!(err, ContractError::Parse(_)));
        assert!(err.to_string().contains("line"));
    }

    #[test]
    fn test_from_json_missing_responses_is_data_error() {
        let err = ContractParser::from_json(r#"{"operationId": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid operation structure"));
    }

    #[cfg(feature = "yaml-support")]
    #[test]
    fn test_from_yaml_minimal_operation() {
        let yaml = "responses:\n  \"200\":\n    description: ok\n";
        let operation = ContractParser::from_yaml(yaml).unwrap();
        assert_eq!(operation.responses.len(), 1);
    }
}
