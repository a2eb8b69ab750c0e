// Contract Model - operations, routes and declared errors

use crate::domain::shape::Shape;
use serde::{Deserialize, Serialize};

/// HTTP verb of an operation route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("Unsupported HTTP method: {}", other)),
        }
    }
}

/// Human-readable route metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteMeta {
    pub summary: Option<&'static str>,
    pub description: Option<&'static str>,
    pub tags: Vec<&'static str>,
}

/// Declared error of an operation
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSpec {
    pub kind: &'static str,
    pub status: u16,
    pub message: &'static str,
    pub data: Option<Shape>,
}

impl ErrorSpec {
    /// Declare an error kind; the status defaults from well-known kinds
    pub fn new(kind: &'static str, message: &'static str) -> Self {
        Self {
            kind,
            status: default_status(kind),
            message,
            data: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_data(mut self, shape: Shape) -> Self {
        self.data = Some(shape);
        self
    }
}

/// HTTP status for well-known error kinds (500 for anything else)
pub fn default_status(kind: &str) -> u16 {
    match kind {
        "BAD_REQUEST" => 400,
        "UNAUTHORIZED" => 401,
        "FORBIDDEN" => 403,
        "NOT_FOUND" => 404,
        "METHOD_NOT_SUPPORTED" => 405,
        "NOT_ACCEPTABLE" => 406,
        "TIMEOUT" => 408,
        "CONFLICT" => 409,
        "PRECONDITION_FAILED" => 412,
        "PAYLOAD_TOO_LARGE" => 413,
        "UNSUPPORTED_MEDIA_TYPE" => 415,
        "UNPROCESSABLE_CONTENT" => 422,
        "TOO_MANY_REQUESTS" => 429,
        "CLIENT_CLOSED_REQUEST" => 499,
        "INTERNAL_SERVER_ERROR" => 500,
        "NOT_IMPLEMENTED" => 501,
        "BAD_GATEWAY" => 502,
        "SERVICE_UNAVAILABLE" => 503,
        "GATEWAY_TIMEOUT" => 504,
        _ => 500,
    }
}

/// A named, routable unit of the contract
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub meta: RouteMeta,
    pub input: Option<Shape>,
    pub output: Shape,
    /// Declared errors in declaration order
    pub errors: Vec<ErrorSpec>,
}

impl OperationSpec {
    /// Start an operation with an empty contract (no input, empty object output)
    pub fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            meta: RouteMeta::default(),
            input: None,
            output: Shape::object(Vec::new()),
            errors: Vec::new(),
        }
    }

    pub fn summary(mut self, summary: &'static str) -> Self {
        self.meta.summary = Some(summary);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.meta.description = Some(description);
        self
    }

    pub fn tags(mut self, tags: &[&'static str]) -> Self {
        self.meta.tags = tags.to_vec();
        self
    }

    pub fn input(mut self, shape: Shape) -> Self {
        self.input = Some(shape);
        self
    }

    pub fn output(mut self, shape: Shape) -> Self {
        self.output = shape;
        self
    }

    pub fn error(mut self, error: ErrorSpec) -> Self {
        self.errors.push(error);
        self
    }

    /// Look up a declared error by kind
    pub fn error_spec(&self, kind: &str) -> Option<&ErrorSpec> {
        self.errors.iter().find(|e| e.kind == kind)
    }
}
