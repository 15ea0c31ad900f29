use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One declared operation of an API contract: the parameter list, an
/// optional request body, and the status-keyed response map. This is the
/// compiler's immutable input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationSpec {
    /// Operation identifier (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Short summary (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Longer description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared parameters across all locations
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// Request body declaration (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodySpec>,

    /// Responses keyed by status code string or the literal "default"
    pub responses: HashMap<String, ResponseSpec>,
}

impl OperationSpec {
    /// Create an empty operation with no parameters and no responses.
    pub fn new() -> Self {
        Self {
            operation_id: None,
            summary: None,
            description: None,
            parameters: Vec::new(),
            request_body: None,
            responses: HashMap::new(),
        }
    }

    /// Set the operation id
    pub fn with_operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    /// Append a declared parameter
    pub fn add_parameter(&mut self, parameter: ParameterSpec) {
        self.parameters.push(parameter);
    }

    /// Declare the request body
    pub fn with_request_body(mut self, body: RequestBodySpec) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Declare a response under a status key ("200", "default", ...)
    pub fn add_response(&mut self, status: impl Into<String>, response: ResponseSpec) {
        self.responses.insert(status.into(), response);
    }
}

impl Default for OperationSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// One declared parameter: name, location tag, required flag, and an
/// optional schema for its value.
///
/// The location is kept as the raw string from the contract so that an
/// unrecognized tag survives into the compile error for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name as it appears on the wire
    pub name: String,

    /// Raw location tag ("header", "query", "path", "cookie")
    #[serde(rename = "in")]
    pub location: String,

    /// Whether the parameter must be present (default: false)
    #[serde(default)]
    pub required: bool,

    /// Parameter description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// JSON Schema constraining the parameter value (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl ParameterSpec {
    /// Create a parameter with the given name and location tag.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            required: false,
            description: None,
            schema: None,
        }
    }

    /// Mark the parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a value schema
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// The four recognized parameter locations. The compiler matches on this
/// closed set; a tag that maps to none of them is a compile failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Header,
    Query,
    Path,
    Cookie,
}

impl ParameterLocation {
    /// Map a raw contract tag onto the closed location set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "header" => Some(ParameterLocation::Header),
            "query" => Some(ParameterLocation::Query),
            "path" => Some(ParameterLocation::Path),
            "cookie" => Some(ParameterLocation::Cookie),
            _ => None,
        }
    }

    /// The canonical tag for this location.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Header => "header",
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared request body: a required flag and a schema per media type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestBodySpec {
    /// Body description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether a body must be present (default: false)
    #[serde(default)]
    pub required: bool,

    /// Media type name to payload declaration
    pub content: HashMap<String, MediaTypeSpec>,
}

impl RequestBodySpec {
    /// Create an empty body declaration.
    pub fn new() -> Self {
        Self {
            description: None,
            required: false,
            content: HashMap::new(),
        }
    }

    /// Mark the body as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare a media type with its payload schema
    pub fn add_content(&mut self, media_type: impl Into<String>, media: MediaTypeSpec) {
        self.content.insert(media_type.into(), media);
    }
}

impl Default for RequestBodySpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload declaration for one media type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaTypeSpec {
    /// JSON Schema constraining the payload (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl MediaTypeSpec {
    /// Media type with a payload schema.
    pub fn with_schema(schema: Value) -> Self {
        Self { schema: Some(schema) }
    }

    /// Media type with no payload schema (any payload passes).
    pub fn unconstrained() -> Self {
        Self { schema: None }
    }
}

/// One declared response: a description and optional per-media-type
/// payload schemas. No content means any payload is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseSpec {
    /// Response description
    #[serde(default)]
    pub description: String,

    /// Media type name to payload declaration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<HashMap<String, MediaTypeSpec>>,
}

impl ResponseSpec {
    /// Create a response with the given description and no content.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: None,
        }
    }

    /// Declare a media type with its payload schema
    pub fn add_content(&mut self, media_type: impl Into<String>, media: MediaTypeSpec) {
        self.content
            .get_or_insert_with(HashMap::new)
            .insert(media_type.into(), media);
    }
}
