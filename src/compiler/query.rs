use std::collections::HashMap;

use serde_json::Value;

use crate::compiler::parameter::CompiledParameter;
use crate::contract::{ParameterLocation, ParameterSpec};
use crate::error::ContractError;

/// Aggregate validator over the full set of declared query parameters.
///
/// Query names are matched exactly as declared (query strings are
/// case-sensitive, unlike headers).
#[derive(Debug)]
pub struct CompiledQuery {
    parameters: Vec<CompiledParameter>,
}

impl CompiledQuery {
    /// Compile the declared query parameter set.
    pub fn new(parameters: &[&ParameterSpec]) -> Result<Self, ContractError> {
        let compiled = parameters
            .iter()
            .map(|p| CompiledParameter::new(p, ParameterLocation::Query))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parameters: compiled })
    }

    /// Number of declared query parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// True if no query parameters are declared.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Validate the live query map against every declared query parameter,
    /// stopping at the first failure.
    pub fn validate(&self, query: &HashMap<String, Value>) -> Result<(), ContractError> {
        for parameter in &self.parameters {
            parameter.validate(query.get(parameter.name()))?;
        }
        Ok(())
    }
}
