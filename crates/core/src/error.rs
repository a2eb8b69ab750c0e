// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Duplicate route: {method} {path} is already registered by '{existing}'")]
    DuplicateRoute {
        method: String,
        path: String,
        existing: String,
    },

    #[error("Duplicate operation name: {0}")]
    DuplicateOperation(String),

    #[error("Invalid contract for '{operation}': {reason}")]
    InvalidContract { operation: String, reason: String },

    #[error("No handler bound for operation '{0}'")]
    MissingHandler(String),

    #[error("Handler bound to unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Handler already bound for operation '{0}'")]
    DuplicateHandler(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
