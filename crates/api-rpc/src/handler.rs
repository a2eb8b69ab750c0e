//! RPC Method Handlers
//!
//! Bridges JSON-RPC calls onto the contract dispatcher.

use crate::error::{malformed_params, to_rpc_error};
use dashboard_core::application::{ContractDocument, Dispatcher};
use dashboard_core::domain::{Envelope, Request};
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    dispatcher: Arc<Dispatcher>,
    document: Arc<ContractDocument>,
}

impl RpcHandler {
    pub fn new(dispatcher: Arc<Dispatcher>, document: Arc<ContractDocument>) -> Self {
        Self {
            dispatcher,
            document,
        }
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Operation called by name; raw params are the input body
    pub async fn call(
        &self,
        operation: &str,
        raw_params: Option<&str>,
    ) -> Result<Value, ErrorObjectOwned> {
        let started = Instant::now();
        let body = match raw_params {
            Some(raw) => serde_json::from_str(raw).map_err(malformed_params)?,
            None => Value::Null,
        };

        let envelope = self.dispatcher.call(operation, body).await;
        log_completed(operation, &envelope, started);
        into_rpc_result(envelope)
    }

    /// contract.dispatch
    pub async fn dispatch(&self, request: Request) -> Result<Value, ErrorObjectOwned> {
        let started = Instant::now();
        let target = format!("{} {}", request.method, request.path);

        let envelope = self.dispatcher.handle(request).await;
        log_completed(&target, &envelope, started);
        into_rpc_result(envelope)
    }

    /// contract.describe
    pub fn describe(&self) -> Result<Value, ErrorObjectOwned> {
        serde_json::to_value(self.document.as_ref())
            .map_err(|_| to_rpc_error(dashboard_core::domain::Failure::internal()))
    }
}

fn log_completed(target: &str, envelope: &Envelope, started: Instant) {
    info!(
        target_op = %target,
        status = envelope.status(),
        duration_ms = started.elapsed().as_millis() as u64,
        "RPC request completed"
    );
}

fn into_rpc_result(envelope: Envelope) -> Result<Value, ErrorObjectOwned> {
    envelope.into_result().map_err(to_rpc_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use dashboard_core::application::{dashboard_dispatcher, describe};
    use dashboard_core::domain::HttpMethod;
    use dashboard_core::port::{FixedRandomSource, SystemTimeProvider};
    use serde_json::json;

    fn handler() -> RpcHandler {
        let dispatcher =
            dashboard_dispatcher(Arc::new(SystemTimeProvider), Arc::new(FixedRandomSource(0)))
                .unwrap();
        let document = describe(dispatcher.registry(), "Dashboard API", "test");
        RpcHandler::new(Arc::new(dispatcher), Arc::new(document))
    }

    #[tokio::test]
    async fn test_call_by_name() {
        let h = handler();

        let ok = h.call("hello", Some(r#"{"name":"yoo"}"#)).await.unwrap();
        assert_eq!(ok, json!({"message": "Hello, yoo!"}));

        let err = h.call("hello", Some(r#"{"name":"woo"}"#)).await.unwrap_err();
        assert_eq!(err.code(), code::DOMAIN_ERROR);

        let err = h.call("hello", None).await.unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_FAILED);

        let err = h.call("hello", Some("{not json")).await.unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_FAILED);
    }

    #[tokio::test]
    async fn test_dispatch_by_route() {
        let h = handler();

        let health = h
            .dispatch(Request::new(HttpMethod::Get, "/health", Value::Null))
            .await
            .unwrap();
        assert_eq!(health["status"], "ok");

        let err = h
            .dispatch(Request::new(HttpMethod::Get, "/hello", Value::Null))
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::NOT_MATCHED);
    }

    #[test]
    fn test_describe_lists_operations() {
        let doc = handler().describe().unwrap();
        let names: Vec<&str> = doc["operations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|op| op["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["hello", "bye", "health"]);
    }
}
