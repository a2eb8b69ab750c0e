// Handler Set - business logic bound to each dashboard operation

pub mod bye;
pub mod health;
pub mod hello;

pub use bye::ByeHandler;
pub use health::HealthHandler;
pub use hello::HelloHandler;

use crate::api::{self, op};
use crate::application::dispatcher::Dispatcher;
use crate::error::Result;
use crate::port::{RandomSource, TimeProvider};
use std::sync::Arc;

/// Build the dashboard contract and bind its handlers
pub fn dashboard_dispatcher(
    time_provider: Arc<dyn TimeProvider>,
    random: Arc<dyn RandomSource>,
) -> Result<Dispatcher> {
    let registry = Arc::new(api::contract()?);

    Dispatcher::builder(registry)
        .bind(op::HELLO, Arc::new(HelloHandler))?
        .bind(op::BYE, Arc::new(ByeHandler::new(time_provider.clone(), random)))?
        .bind(op::HEALTH, Arc::new(HealthHandler::new(time_provider)))?
        .build()
}
