use std::collections::HashMap;

use serde_json::Value;

use crate::compiler::parameter::CompiledParameter;
use crate::contract::{ParameterLocation, ParameterSpec};
use crate::error::ContractError;

/// Aggregate validator over the full set of declared header parameters.
///
/// Built once over the whole set so policies that reason about the
/// collection (rather than one name at a time) have a place to live.
/// Header names are case-insensitive on the wire: declared names are
/// lowercased at compile time, and the live header map is expected to be
/// lowercase-keyed, as produced by common HTTP stacks.
#[derive(Debug)]
pub struct CompiledHeaders {
    parameters: Vec<CompiledParameter>,
}

impl CompiledHeaders {
    /// Compile the declared header parameter set.
    pub fn new(parameters: &[&ParameterSpec]) -> Result<Self, ContractError> {
        let compiled = parameters
            .iter()
            .map(|p| {
                let lowered = ParameterSpec {
                    name: p.name.to_lowercase(),
                    ..(*p).clone()
                };
                CompiledParameter::new(&lowered, ParameterLocation::Header)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parameters: compiled })
    }

    /// Number of declared header parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// True if no header parameters are declared.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Validate the live header map against every declared header
    /// parameter, stopping at the first failure.
    pub fn validate(&self, headers: &HashMap<String, Value>) -> Result<(), ContractError> {
        for parameter in &self.parameters {
            parameter.validate(headers.get(parameter.name()))?;
        }
        Ok(())
    }
}
