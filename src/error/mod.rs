//! Error types for contract compilation and validation.
//!
//! A single crate-wide error enum covers both compile-time failures
//! (bad location tags, uncompilable schemas) and validation-time failures
//! (missing parameters, schema violations). Validation is fail-fast: the
//! first failing check produces the error and no partial result is kept.

use std::fmt;

use thiserror::Error;

use crate::contract::ParameterLocation;

/// Error raised while compiling an operation or validating live data
/// against it.
#[derive(Error, Debug)]
pub enum ContractError {
    /// A declared parameter used a location tag outside
    /// header/query/path/cookie. Raised at compile time.
    #[error("unsupported parameter location '{location}' for parameter '{name}'")]
    UnsupportedParameterLocation {
        /// Name of the offending parameter.
        name: String,
        /// The raw location tag as it appeared in the contract.
        location: String,
    },

    /// The reported response status matched neither a declared status nor
    /// a `default` entry.
    #[error("unsupported response status code '{status}'")]
    UnsupportedResponseStatusCode {
        /// The live status that had no declared validator.
        status: String,
    },

    /// A parameter declared `required: true` was absent from the request.
    #[error("required {location} parameter '{name}' is missing")]
    MissingRequiredParameter {
        /// Name of the missing parameter.
        name: String,
        /// Where the parameter was declared to live.
        location: ParameterLocation,
    },

    /// The operation declares a required request body and none was supplied.
    #[error("request body is required but missing")]
    MissingRequestBody,

    /// A payload was supplied under a content type the contract does not
    /// declare (or with no content type at all).
    #[error("no schema declared for content type {}", .content_type.as_deref().unwrap_or("<none>"))]
    UnsupportedMediaType {
        /// The live content type, if one was present.
        content_type: Option<String>,
    },

    /// A schema in the contract could not be compiled into a validator.
    #[error("schema for {context} is invalid: {reason}")]
    SchemaCompile {
        /// Which part of the operation owned the schema.
        context: String,
        /// Compiler diagnostic from the schema engine.
        reason: String,
    },

    /// A live value did not conform to its compiled schema.
    #[error("validation failed for {location}:\n{violations}")]
    SchemaValidation {
        /// Which part of the request/response was being checked.
        location: String,
        /// Structured list of individual violations.
        violations: Violations,
    },

    /// The contract document could not be parsed into the operation model.
    #[error("contract parse error: {0}")]
    Parse(String),

    /// IO error reading a contract document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single schema violation with its position in the instance document.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// JSON Pointer path to the violating value (empty for the root).
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of schema violations from one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Wrap a list of violations. Callers should not construct an empty set.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    /// Number of individual violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
