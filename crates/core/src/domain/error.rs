// Domain Error Types - outcomes raised by operation handlers

use serde_json::Value;
use thiserror::Error;

/// Expected, named business failure raised by a handler
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}")]
pub struct DomainError {
    pub kind: String,
    /// Overrides the declared message template when set
    pub message: Option<String>,
    pub data: Option<Value>,
}

impl DomainError {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: None,
            data: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Handler failure: either a domain error or an unexpected fault
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Handler fault: {0}")]
    Internal(#[from] crate::error::AppError),
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Internal(err.into())
    }
}

pub type HandlerResult = std::result::Result<Value, HandlerError>;
