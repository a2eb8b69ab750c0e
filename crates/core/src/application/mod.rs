// Application Layer - Registry, dispatch, self-description and handlers

pub mod describe;
pub mod dispatcher;
pub mod handlers;
mod panic_guard;
pub mod registry;

// Re-exports
pub use describe::{describe, ContractDocument, ErrorDoc, OperationDoc};
pub use dispatcher::{Dispatcher, DispatcherBuilder, OperationHandler};
pub use handlers::dashboard_dispatcher;
pub use registry::ContractRegistry;
