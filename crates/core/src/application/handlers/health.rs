// health - liveness report

use crate::api::HealthResponse;
use crate::application::dispatcher::OperationHandler;
use crate::domain::HandlerResult;
use crate::port::TimeProvider;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct HealthHandler {
    time_provider: Arc<dyn TimeProvider>,
}

impl HealthHandler {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { time_provider }
    }
}

#[async_trait]
impl OperationHandler for HealthHandler {
    async fn handle(&self, _input: Value) -> HandlerResult {
        let response = HealthResponse {
            status: "ok".to_string(),
            timestamp: self.time_provider.now_iso8601(),
        };
        Ok(serde_json::to_value(response)?)
    }
}
