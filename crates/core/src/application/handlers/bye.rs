// bye - farewell with a demo user and session figures

use crate::api::{FarewellResponse, User, UserRole};
use crate::application::dispatcher::OperationHandler;
use crate::domain::HandlerResult;
use crate::port::{RandomSource, TimeProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::ops::Range;
use std::sync::Arc;

/// Session length bounds in seconds (5 to 65 minutes)
pub const SESSION_DURATION_SECS: Range<u32> = 300..3900;

pub struct ByeHandler {
    time_provider: Arc<dyn TimeProvider>,
    random: Arc<dyn RandomSource>,
}

impl ByeHandler {
    pub fn new(time_provider: Arc<dyn TimeProvider>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            time_provider,
            random,
        }
    }

    pub fn farewell(&self) -> FarewellResponse {
        FarewellResponse {
            message: "Goodbye! Thanks for using our API.".to_string(),
            user: Some(demo_user()),
            timestamp: self.time_provider.now_iso8601(),
            session_duration: Some(self.random.next_in(SESSION_DURATION_SECS)),
        }
    }
}

/// Stand-in for an authenticated user context
fn demo_user() -> User {
    User {
        id: "user_123".to_string(),
        name: "Demo User".to_string(),
        email: "demo@example.com".to_string(),
        role: UserRole::User,
        created_at: "2023-01-15T10:30:00.000Z".to_string(),
        is_active: true,
    }
}

#[async_trait]
impl OperationHandler for ByeHandler {
    async fn handle(&self, _input: Value) -> HandlerResult {
        Ok(serde_json::to_value(self.farewell())?)
    }
}
