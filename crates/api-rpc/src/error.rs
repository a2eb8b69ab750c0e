//! RPC Error Types
//!
//! Maps dispatcher failures to JSON-RPC error codes.

use crate::types::RpcErrorData;
use dashboard_core::domain::envelope::kind;
use dashboard_core::domain::Failure;
use jsonrpsee::types::ErrorObjectOwned;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_FAILED: i32 = 4000;
    pub const NOT_MATCHED: i32 = 4001;
    pub const DOMAIN_ERROR: i32 = 4100;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// JSON-RPC code for a failure kind
pub fn code_for(kind_name: &str) -> i32 {
    match kind_name {
        kind::VALIDATION_FAILED => code::VALIDATION_FAILED,
        kind::NOT_MATCHED => code::NOT_MATCHED,
        kind::INTERNAL => code::INTERNAL_ERROR,
        _ => code::DOMAIN_ERROR,
    }
}

/// Convert a dispatcher Failure to a JSON-RPC ErrorObject
pub fn to_rpc_error(failure: Failure) -> ErrorObjectOwned {
    let code = code_for(&failure.kind);
    let data = RpcErrorData {
        kind: failure.kind,
        status: failure.status,
        data: failure.data,
    };
    ErrorObjectOwned::owned(code, failure.message, Some(data))
}

/// Params that are not valid JSON never reach the dispatcher
pub fn malformed_params(err: serde_json::Error) -> ErrorObjectOwned {
    to_rpc_error(Failure::malformed_body(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_domain_failure_keeps_kind_and_data() {
        let err = to_rpc_error(Failure {
            kind: "INVALID_NAME".to_string(),
            status: 500,
            message: "Name 'bob' is not allowed.".to_string(),
            data: Some(json!({"providedName": "bob"})),
        });

        assert_eq!(err.code(), code::DOMAIN_ERROR);
        assert_eq!(err.message(), "Name 'bob' is not allowed.");
        let data: serde_json::Value = serde_json::from_str(err.data().unwrap().get()).unwrap();
        assert_eq!(
            data,
            json!({"kind": "INVALID_NAME", "status": 500, "data": {"providedName": "bob"}})
        );
    }

    #[test]
    fn test_builtin_codes() {
        assert_eq!(to_rpc_error(Failure::internal()).code(), code::INTERNAL_ERROR);
        assert_eq!(to_rpc_error(Failure::not_matched("x")).code(), code::NOT_MATCHED);
        assert_eq!(
            to_rpc_error(Failure::validation_failed(vec![])).code(),
            code::VALIDATION_FAILED
        );
    }
}
