use serde_json::Value;

use crate::compiler::schema::SchemaValidator;
use crate::contract::{ParameterLocation, ParameterSpec};
use crate::error::ContractError;

/// One declared parameter compiled for repeated validation.
///
/// Required-ness is enforced here, not in the orchestrator: an absent
/// value is an error only when the declaration says `required: true`.
/// Parameters without a schema get the presence check alone.
#[derive(Debug)]
pub struct CompiledParameter {
    name: String,
    location: ParameterLocation,
    required: bool,
    validator: Option<SchemaValidator>,
}

impl CompiledParameter {
    /// Compile a declared parameter. The caller has already resolved the
    /// location tag onto the closed location set.
    pub fn new(
        parameter: &ParameterSpec,
        location: ParameterLocation,
    ) -> Result<Self, ContractError> {
        let context = format!("{} parameter '{}'", location, parameter.name);
        let validator = match &parameter.schema {
            Some(schema) => Some(SchemaValidator::new(schema, &context)?),
            None => None,
        };

        Ok(Self {
            name: parameter.name.clone(),
            location,
            required: parameter.required,
            validator,
        })
    }

    /// Parameter name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the parameter lives on the wire.
    pub fn location(&self) -> ParameterLocation {
        self.location
    }

    /// Whether the declaration marks the parameter required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validate the live value for this parameter, `None` meaning absent.
    pub fn validate(&self, value: Option<&Value>) -> Result<(), ContractError> {
        match value {
            None => {
                if self.required {
                    Err(ContractError::MissingRequiredParameter {
                        name: self.name.clone(),
                        location: self.location,
                    })
                } else {
                    Ok(())
                }
            }
            Some(value) => match &self.validator {
                Some(validator) => {
                    let location = format!("{} parameter '{}'", self.location, self.name);
                    validator.validate(value, &location)
                }
                None => Ok(()),
            },
        }
    }
}
