//! SDK Request/Response Types
//!
//! The contract models are shared with the server, so client and server
//! cannot drift apart.

pub use dashboard_core::api::{
    FarewellResponse, HealthResponse, HelloInput, HelloOutput, InvalidNameData, User, UserRole,
};
pub use dashboard_core::application::{ContractDocument, ErrorDoc, OperationDoc};
pub use dashboard_core::domain::HttpMethod;
