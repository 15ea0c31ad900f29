use std::collections::HashMap;

use serde_json::Value;

use crate::compiler::schema::SchemaValidator;
use crate::contract::RequestBodySpec;
use crate::error::ContractError;

/// Request-body validator: one compiled schema per declared media type,
/// plus the declaration's required flag.
///
/// Dispatch strips media-type parameters (`; charset=...`) and lowercases
/// the bare type before lookup. A media type with no schema accepts any
/// payload.
#[derive(Debug)]
pub struct CompiledRequestBody {
    required: bool,
    content: HashMap<String, Option<SchemaValidator>>,
}

impl CompiledRequestBody {
    /// Compile the declared request body.
    pub fn new(body: &RequestBodySpec) -> Result<Self, ContractError> {
        let mut content = HashMap::with_capacity(body.content.len());
        for (media_type, media) in &body.content {
            let key = normalize_media_type(media_type);
            let validator = match &media.schema {
                Some(schema) => {
                    let context = format!("request body ({})", key);
                    Some(SchemaValidator::new(schema, &context)?)
                }
                None => None,
            };
            content.insert(key, validator);
        }
        Ok(Self {
            required: body.required,
            content,
        })
    }

    /// Whether the declaration marks the body required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Declared media types, normalized.
    pub fn media_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.content.keys().map(|s| s.as_str()).collect();
        types.sort();
        types
    }

    /// Validate a live body under the request's declared content type.
    ///
    /// Both arguments pass through from the request unchanged; absence is
    /// decided here, not by the orchestrator.
    pub fn validate(
        &self,
        content_type: Option<&str>,
        body: Option<&Value>,
    ) -> Result<(), ContractError> {
        let body = match body {
            Some(body) => body,
            None => {
                return if self.required {
                    Err(ContractError::MissingRequestBody)
                } else {
                    Ok(())
                };
            }
        };

        // A payload with no content type cannot be matched to a declared
        // media type, so it is rejected as unsupported.
        let content_type = content_type.ok_or(ContractError::UnsupportedMediaType {
            content_type: None,
        })?;

        let key = normalize_media_type(content_type);
        let validator = self.content.get(&key).ok_or_else(|| {
            ContractError::UnsupportedMediaType {
                content_type: Some(content_type.to_string()),
            }
        })?;

        match validator {
            Some(validator) => validator.validate(body, &format!("request body ({})", key)),
            None => Ok(()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::MediaTypeSpec;
    use serde_json::json;

    fn json_body(required: bool) -> CompiledRequestBody {
        let mut spec = RequestBodySpec::new();
        if required {
            spec = spec.required();
        }
        spec.add_content(
            "application/json",
            MediaTypeSpec::with_schema(json!({
                "type": "object",
                "required": ["name"],
                "properties": {"name": {"type": "string"}}
            })),
        );
        CompiledRequestBody::new(&spec).unwrap()
    }

    #[test]
    fn test_missing_body_required_vs_optional() {
        let required = json_body(true);
        assert!(matches!(
            required.validate(None, None).unwrap_err(),
            ContractError::MissingRequestBody
        ));

        let optional = json_body(false);
        optional.validate(None, None).unwrap();
    }

    #[test]
    fn test_content_type_dispatch_with_charset_parameter() {
        let body = json_body(true);
        body.validate(
            Some("application/json; charset=utf-8"),
            Some(&json!({"name": "widget"})),
        )
        .unwrap();
    }

    #[test]
    fn test_undeclared_content_type_rejected() {
        let body = json_body(true);
        let err = body
            .validate(Some("text/csv"), Some(&json!("a,b,c")))
            .unwrap_err();
        match err {
            ContractError::UnsupportedMediaType { content_type } => {
                assert_eq!(content_type.as_deref(), Some("text/csv"));
            }
            other => panic!("expected UnsupportedMediaType, got: {other}"),
        }
    }

    #[test]
    fn test_body_without_content_type_rejected() {
        let body = json_body(false);
        let err = body.validate(None, Some(&json!({}))).unwrap_err();
        assert!(matches!(
            err,
            ContractError::UnsupportedMediaType { content_type: None }
        ));
    }

    #[test]
    fn test_schema_violation_propagates() {
        let body = json_body(true);
        let err = body
            .validate(Some("application/json"), Some(&json!({"name": 42})))
            .unwrap_err();
        assert!(matches!(err, ContractError::SchemaValidation { .. }));
    }

    #[test]
    fn test_media_types_reported_normalized_and_sorted() {
        let mut spec = RequestBodySpec::new();
        spec.add_content("Application/JSON; charset=utf-8", MediaTypeSpec::unconstrained());
        spec.add_content("text/plain", MediaTypeSpec::unconstrained());
        let body = CompiledRequestBody::new(&spec).unwrap();

        assert_eq!(body.media_types(), vec!["application/json", "text/plain"]);
        assert!(!body.is_required());
    }

    #[test]
    fn test_unconstrained_media_type_accepts_any_payload() {
        let mut spec = RequestBodySpec::new();
        spec.add_content("application/octet-stream", MediaTypeSpec::unconstrained());
        let body = CompiledRequestBody::new(&spec).unwrap();
        body.validate(Some("application/octet-stream"), Some(&json!("raw")))
            .unwrap();
    }
}
