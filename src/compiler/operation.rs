use std::collections::HashMap;

use log::{debug, warn};
use serde_json::Value;

use crate::compiler::body::CompiledRequestBody;
use crate::compiler::header::CompiledHeaders;
use crate::compiler::parameter::CompiledParameter;
use crate::compiler::query::CompiledQuery;
use crate::compiler::response::{CompiledResponse, ResponseKey};
use crate::compiler::{RequestMeta, ResponseMeta};
use crate::contract::{OperationSpec, ParameterLocation, ParameterSpec};
use crate::error::ContractError;

/// One operation definition compiled into a reusable validator.
///
/// Construction happens once at contract-load time: parameters are
/// partitioned by location in a single pass, header and query get
/// aggregate validators over their whole sets, path and cookie get
/// per-name validator maps, and the request body and every declared
/// response get their own compiled validators. The result is immutable,
/// holds no per-request state, and is safe to share across concurrent
/// callers.
#[derive(Debug)]
pub struct CompiledOperation {
    header: CompiledHeaders,
    query: CompiledQuery,
    path: HashMap<String, CompiledParameter>,
    cookie: HashMap<String, CompiledParameter>,
    body: Option<CompiledRequestBody>,
    response: HashMap<ResponseKey, CompiledResponse>,
}

impl CompiledOperation {
    /// Compile an operation definition.
    ///
    /// Fails with [`ContractError::UnsupportedParameterLocation`] if any
    /// parameter's location tag is outside header/query/path/cookie, and
    /// with [`ContractError::SchemaCompile`] if any declared schema cannot
    /// be compiled.
    pub fn new(operation: &OperationSpec) -> Result<Self, ContractError> {
        let mut header: Vec<&ParameterSpec> = Vec::new();
        let mut query: Vec<&ParameterSpec> = Vec::new();
        let mut path = HashMap::new();
        let mut cookie = HashMap::new();

        for parameter in &operation.parameters {
            let location = ParameterLocation::from_tag(&parameter.location).ok_or_else(|| {
                ContractError::UnsupportedParameterLocation {
                    name: parameter.name.clone(),
                    location: parameter.location.clone(),
                }
            })?;

            match location {
                ParameterLocation::Header => header.push(parameter),
                ParameterLocation::Query => query.push(parameter),
                ParameterLocation::Path => {
                    if !parameter.required {
                        warn!(
                            "path parameter '{}' is not marked required; \
                             route templates always supply a value",
                            parameter.name
                        );
                    }
                    path.insert(
                        parameter.name.clone(),
                        CompiledParameter::new(parameter, location)?,
                    );
                }
                ParameterLocation::Cookie => {
                    cookie.insert(
                        parameter.name.clone(),
                        CompiledParameter::new(parameter, location)?,
                    );
                }
            }
        }

        let header = CompiledHeaders::new(&header)?;
        let query = CompiledQuery::new(&query)?;

        let body = match &operation.request_body {
            Some(body) => Some(CompiledRequestBody::new(body)?),
            None => None,
        };

        let mut response = HashMap::with_capacity(operation.responses.len());
        for (status, spec) in &operation.responses {
            response.insert(ResponseKey::parse(status), CompiledResponse::new(spec, status)?);
        }

        debug!(
            "compiled operation '{}': {} header, {} query, {} path, {} cookie, body: {}, {} responses",
            operation.operation_id.as_deref().unwrap_or("<anonymous>"),
            header.len(),
            query.len(),
            path.len(),
            cookie.len(),
            body.is_some(),
            response.len()
        );

        Ok(Self {
            header,
            query,
            path,
            cookie,
            body,
            response,
        })
    }

    /// Validate live request data against the compiled operation.
    ///
    /// Checks run in a fixed order and stop at the first failure: header
    /// aggregate, query aggregate, path parameters, cookie parameters,
    /// then the body (only if one was declared). The body validator
    /// receives the header map's `content-type` value unchanged.
    pub fn validate_request(&self, request: &RequestMeta) -> Result<(), ContractError> {
        self.header.validate(&request.header)?;
        self.query.validate(&request.query)?;

        for (name, parameter) in &self.path {
            parameter.validate(request.path.get(name))?;
        }

        for (name, parameter) in &self.cookie {
            parameter.validate(request.cookie.get(name))?;
        }

        if let Some(body) = &self.body {
            let content_type = request.header.get("content-type").and_then(Value::as_str);
            body.validate(content_type, request.body.as_ref())?;
        }

        Ok(())
    }

    /// Validate live response data against the compiled operation.
    ///
    /// The validator for the exact reported status wins; otherwise the
    /// `default` entry is used; a status with neither is a contract
    /// violation ([`ContractError::UnsupportedResponseStatusCode`]).
    pub fn validate_response(&self, response: &ResponseMeta) -> Result<(), ContractError> {
        let compiled = self
            .response
            .get(&ResponseKey::Status(response.status.clone()))
            .or_else(|| self.response.get(&ResponseKey::Default))
            .ok_or_else(|| ContractError::UnsupportedResponseStatusCode {
                status: response.status.clone(),
            })?;

        compiled.validate(response)
    }

    /// Look up the compiled validator for a path parameter by name.
    pub fn path_parameter(&self, name: &str) -> Option<&CompiledParameter> {
        self.path.get(name)
    }

    /// Look up the compiled validator for a cookie parameter by name.
    pub fn cookie_parameter(&self, name: &str) -> Option<&CompiledParameter> {
        self.cookie.get(name)
    }

    /// Number of compiled path parameters.
    pub fn path_parameter_count(&self) -> usize {
        self.path.len()
    }

    /// Number of compiled cookie parameters.
    pub fn cookie_parameter_count(&self) -> usize {
        self.cookie.len()
    }

    /// Whether a request-body validator was compiled.
    pub fn has_body_validator(&self) -> bool {
        self.body.is_some()
    }

    /// Whether a validator exists for the given response key.
    pub fn declares_response(&self, key: &ResponseKey) -> bool {
        self.response.contains_key(key)
    }
}
