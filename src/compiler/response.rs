use std::collections::HashMap;

use crate::compiler::schema::SchemaValidator;
use crate::compiler::ResponseMeta;
use crate::contract::ResponseSpec;
use crate::error::ContractError;

/// Key domain of the compiled response map: a declared status code string,
/// or the contract's `default` sentinel.
///
/// Status keys are kept as strings exactly as declared; the fallback
/// lookup is an explicit two-step (exact status, then `Default`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseKey {
    /// A declared status code, e.g. `"200"`.
    Status(String),
    /// The `default` fallback entry.
    Default,
}

impl ResponseKey {
    /// Parse a contract response map key.
    pub fn parse(key: &str) -> Self {
        if key == "default" {
            ResponseKey::Default
        } else {
            ResponseKey::Status(key.to_string())
        }
    }
}

/// One declared response compiled for repeated validation.
///
/// A response with no declared content accepts any payload; declared
/// content compiles one schema validator per media type.
#[derive(Debug)]
pub struct CompiledResponse {
    content: Option<HashMap<String, Option<SchemaValidator>>>,
}

impl CompiledResponse {
    /// Compile a declared response under the given status key.
    pub fn new(response: &ResponseSpec, status_key: &str) -> Result<Self, ContractError> {
        let content = match &response.content {
            None => None,
            Some(declared) => {
                let mut compiled = HashMap::with_capacity(declared.len());
                for (media_type, media) in declared {
                    let key = normalize_media_type(media_type);
                    let validator = match &media.schema {
                        Some(schema) => {
                            let context = format!("response {} ({})", status_key, key);
                            Some(SchemaValidator::new(schema, &context)?)
                        }
                        None => None,
                    };
                    compiled.insert(key, validator);
                }
                Some(compiled)
            }
        };
        Ok(Self { content })
    }

    /// Validate live response data against this declared response.
    ///
    /// The media type is taken from the response header map; when the
    /// header is absent and exactly one media type is declared, that one
    /// is used.
    pub fn validate(&self, response: &ResponseMeta) -> Result<(), ContractError> {
        let content = match &self.content {
            None => return Ok(()),
            Some(content) => content,
        };

        let header_type = response
            .header
            .get("content-type")
            .and_then(|v| v.as_str())
            .map(normalize_media_type);

        let key = match header_type {
            Some(key) => key,
            None if content.len() == 1 => content.keys().next().cloned().unwrap_or_default(),
            None => {
                return Err(ContractError::UnsupportedMediaType { content_type: None });
            }
        };

        let validator = content.get(&key).ok_or_else(|| {
            ContractError::UnsupportedMediaType {
                content_type: Some(key.clone()),
            }
        })?;

        match (validator, &response.body) {
            (Some(validator), Some(body)) => {
                validator.validate(body, &format!("response body ({})", key))
            }
            // Whether an absent payload is acceptable is a transport
            // concern; the schema is only checked against present bodies.
            _ => Ok(()),
        }
    }
}

/// Strip media-type parameters and lowercase the bare type.
fn normalize_media_type(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or(media_type)
        .trim()
        .to_lowercase()
}
