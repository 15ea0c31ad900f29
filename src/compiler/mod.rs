//! Compilation of operation definitions into reusable validators.
//!
//! Everything here follows a compile-once, validate-many split: schema
//! analysis happens when [`CompiledOperation::new`] is called, and the
//! validate entry points only dispatch over the compiled structure.

pub mod body;
pub mod header;
pub mod operation;
pub mod parameter;
pub mod query;
pub mod response;
pub mod schema;

pub use body::CompiledRequestBody;
pub use header::CompiledHeaders;
pub use operation::CompiledOperation;
pub use parameter::CompiledParameter;
pub use query::CompiledQuery;
pub use response::{CompiledResponse, ResponseKey};
pub use schema::SchemaValidator;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Live request data handed to [`CompiledOperation::validate_request`].
///
/// All maps are string-keyed; any of them may be empty, and an absent
/// path/cookie value is passed through as `None` to its per-name
/// validator. Header map keys are expected lowercase, as produced by
/// common HTTP stacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RequestMeta {
    /// Request headers (lowercase keys)
    pub header: HashMap<String, Value>,
    /// Decoded query string values
    pub query: HashMap<String, Value>,
    /// Values captured from the route template
    pub path: HashMap<String, Value>,
    /// Request cookies
    pub cookie: HashMap<String, Value>,
    /// Raw request body, if any
    pub body: Option<Value>,
}

impl RequestMeta {
    /// Create empty request metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header entry
    pub fn with_header(mut self, name: impl Into<String>, value: Value) -> Self {
        self.header.insert(name.into(), value);
        self
    }

    /// Add a query entry
    pub fn with_query(mut self, name: impl Into<String>, value: Value) -> Self {
        self.query.insert(name.into(), value);
        self
    }

    /// Add a path entry
    pub fn with_path(mut self, name: impl Into<String>, value: Value) -> Self {
        self.path.insert(name.into(), value);
        self
    }

    /// Add a cookie entry
    pub fn with_cookie(mut self, name: impl Into<String>, value: Value) -> Self {
        self.cookie.insert(name.into(), value);
        self
    }

    /// Set the raw body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Live response data handed to [`CompiledOperation::validate_response`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResponseMeta {
    /// Reported status code, as a string ("200", "404", ...)
    pub status: String,
    /// Response headers (lowercase keys)
    pub header: HashMap<String, Value>,
    /// Response payload, if any
    pub body: Option<Value>,
}

impl ResponseMeta {
    /// Create response metadata with the given status.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            header: HashMap::new(),
            body: None,
        }
    }

    /// Add a header entry
    pub fn with_header(mut self, name: impl Into<String>, value: Value) -> Self {
        self.header.insert(name.into(), value);
        self
    }

    /// Set the payload
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
