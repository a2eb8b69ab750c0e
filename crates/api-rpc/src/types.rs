//! RPC Request/Response Types
//!
//! Method names and the error data carried by JSON-RPC error objects.

use serde::{Deserialize, Serialize};

/// Raw dispatcher access: `{method, path, body}`
pub const DISPATCH_METHOD: &str = "contract.dispatch";

/// Self-description document
pub const DESCRIBE_METHOD: &str = "contract.describe";

/// `data` member of every JSON-RPC error returned by this server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorData {
    pub kind: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
