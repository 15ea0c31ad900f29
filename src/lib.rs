//! # oas-gatekeeper
//!
//! Compiled OpenAPI operation validators for request/response conformance
//! checking. An operation definition is compiled once at contract-load
//! time into a [`CompiledOperation`]; the compiled structure is then
//! invoked many times per second on the request-handling hot path.
//!
//! ## Features
//!
//! - **Compile Once, Validate Many**: schema analysis happens at
//!   construction, never per request
//! - **Location-Aware Parameters**: aggregate header/query validators,
//!   per-name path/cookie validator maps
//! - **Content-Type Dispatch**: request bodies validated per declared
//!   media type
//! - **Status-Keyed Responses**: exact status match with explicit
//!   `default` fallback
//! - **Fail-Fast Errors**: first failing check wins, structured
//!   violations throughout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oas_gatekeeper::{CompiledOperation, ContractParser, RequestMeta, ResponseMeta};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Parse one operation from the contract document
//!     let operation = ContractParser::from_json(r#"{
//!         "parameters": [
//!             {"name": "X-Api-Key", "in": "header", "required": true},
//!             {"name": "id", "in": "path", "required": true,
//!              "schema": {"type": "string"}}
//!         ],
//!         "responses": {
//!             "200": {"description": "ok"},
//!             "default": {"description": "anything else"}
//!         }
//!     }"#)?;
//!
//!     // Compile it once
//!     let compiled = CompiledOperation::new(&operation)?;
//!
//!     // Validate live traffic against it, many times
//!     let request = RequestMeta::new()
//!         .with_header("x-api-key", json!("secret"))
//!         .with_path("id", json!("42"));
//!     compiled.validate_request(&request)?;
//!
//!     let response = ResponseMeta::new("200").with_body(json!({"id": 42}));
//!     compiled.validate_response(&response)?;
//!
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod contract;
pub mod error;

// Compiler exports (the hot-path validation layer)
pub use compiler::{
    CompiledHeaders, CompiledOperation, CompiledParameter, CompiledQuery,
    CompiledRequestBody, CompiledResponse, RequestMeta, ResponseKey, ResponseMeta,
    SchemaValidator,
};

// Contract exports (the typed operation model and its parser)
pub use contract::{
    ContractParser, MediaTypeSpec, OperationSpec, ParameterLocation, ParameterSpec,
    RequestBodySpec, ResponseSpec,
};

// Error exports
pub use error::{ContractError, Violation, Violations};

// Result type alias
pub type Result<T> = std::result::Result<T, ContractError>;

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        CompiledOperation, ContractError, ContractParser, MediaTypeSpec, OperationSpec,
        ParameterLocation, ParameterSpec, RequestBodySpec, RequestMeta, ResponseKey,
        ResponseMeta, ResponseSpec, Result,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
