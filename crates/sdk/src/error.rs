//! SDK Error Types

use crate::types::InvalidNameData;
use dashboard_core::api::error_kind;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failure reported by the contract (declared domain error, validation,
    /// unmatched route or internal error)
    #[error("{kind} ({status}): {message}")]
    Contract {
        kind: String,
        status: u16,
        message: String,
        data: Option<Value>,
    },

    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl SdkError {
    /// Failure kind, when the error came from the contract
    pub fn kind(&self) -> Option<&str> {
        match self {
            SdkError::Contract { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Typed data of an `INVALID_NAME` failure
    pub fn invalid_name_data(&self) -> Option<InvalidNameData> {
        match self {
            SdkError::Contract {
                kind,
                data: Some(data),
                ..
            } if kind == error_kind::INVALID_NAME => serde_json::from_value(data.clone()).ok(),
            _ => None,
        }
    }
}

/// `data` member the server attaches to every error object
#[derive(Deserialize)]
struct ContractErrorData {
    kind: String,
    status: u16,
    #[serde(default)]
    data: Option<Value>,
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => {
                let contract = call_err
                    .data()
                    .and_then(|raw| serde_json::from_str::<ContractErrorData>(raw.get()).ok());
                match contract {
                    Some(ContractErrorData { kind, status, data }) => SdkError::Contract {
                        kind,
                        status,
                        message: call_err.message().to_string(),
                        data,
                    },
                    None => SdkError::Rpc {
                        code: call_err.code(),
                        message: call_err.message().to_string(),
                    },
                }
            }
            jsonrpsee::core::ClientError::Transport(e) => {
                SdkError::Transport(format!("Transport error: {}", e))
            }
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => {
                SdkError::Other(format!("Parse error: {}", e))
            }
            _ => SdkError::Other(e.to_string()),
        }
    }
}
