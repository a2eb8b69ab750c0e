// Request / Response Envelope

use crate::domain::contract::HttpMethod;
use crate::domain::validation::Violation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Built-in failure kinds produced by the dispatcher itself
pub mod kind {
    pub const NOT_MATCHED: &str = "NOT_MATCHED";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Inbound request handed over by a transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: HttpMethod,
    pub path: String,
    #[serde(default)]
    pub body: Value,
}

impl Request {
    pub fn new(method: HttpMethod, path: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }
}

/// Structured failure returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: String,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Failure {
    /// `target` names what was asked for ("GET /path" or an operation name)
    pub fn not_matched(target: &str) -> Self {
        Self {
            kind: kind::NOT_MATCHED.to_string(),
            status: 404,
            message: format!("No operation matches {}", target),
            data: None,
        }
    }

    pub fn validation_failed(violations: Vec<Violation>) -> Self {
        Self {
            kind: kind::VALIDATION_FAILED.to_string(),
            status: 400,
            message: "Input validation failed".to_string(),
            // Violation serialization cannot fail
            data: serde_json::to_value(violations).ok(),
        }
    }

    /// Body that is not JSON at all; never reaches the validator
    pub fn malformed_body(detail: impl std::fmt::Display) -> Self {
        Self {
            kind: kind::VALIDATION_FAILED.to_string(),
            status: 400,
            message: format!("Malformed JSON body: {}", detail),
            data: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            kind: kind::INTERNAL.to_string(),
            status: 500,
            message: "Internal server error".to_string(),
            data: None,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.status, self.message)
    }
}

/// Uniform success-or-failure wrapper produced by the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Envelope {
    Success { value: Value },
    Failure(Failure),
}

impl Envelope {
    pub fn success(value: Value) -> Self {
        Envelope::Success { value }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    /// Kind label used for logging ("SUCCESS" or the failure kind)
    pub fn outcome(&self) -> &str {
        match self {
            Envelope::Success { .. } => "SUCCESS",
            Envelope::Failure(failure) => &failure.kind,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Envelope::Success { .. } => 200,
            Envelope::Failure(failure) => failure.status,
        }
    }

    pub fn into_result(self) -> Result<Value, Failure> {
        match self {
            Envelope::Success { value } => Ok(value),
            Envelope::Failure(failure) => Err(failure),
        }
    }
}
