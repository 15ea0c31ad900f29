use jsonschema::Validator;
use serde_json::Value;

use crate::error::{ContractError, Violation, Violations};

/// A JSON Schema compiled once into a reusable validator.
///
/// Compilation happens at contract-load time; `validate` is the hot path
/// and does no re-parsing. The compiled validator is `Send + Sync` and
/// safe to share across concurrent callers.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile a schema. `context` names the owning part of the operation
    /// for diagnostics (e.g. `query parameter 'limit'`).
    pub fn new(schema: &Value, context: &str) -> Result<Self, ContractError> {
        let validator = jsonschema::options().build(schema).map_err(|e| {
            ContractError::SchemaCompile {
                context: context.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { validator })
    }

    /// Check an instance against the compiled schema.
    ///
    /// All violations from one pass are collected into a single
    /// [`ContractError::SchemaValidation`]; `location` names the part of
    /// the request/response being checked.
    pub fn validate(&self, instance: &Value, location: &str) -> Result<(), ContractError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractError::SchemaValidation {
                location: location.to_string(),
                violations: Violations::new(violations),
            })
        }
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}
