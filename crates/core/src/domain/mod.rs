// Domain Layer - Contract model, shapes and validation

pub mod contract;
pub mod envelope;
pub mod error;
pub mod shape;
pub mod validation;

// Re-exports
pub use contract::{ErrorSpec, HttpMethod, OperationSpec, RouteMeta};
pub use envelope::{Envelope, Failure, Request};
pub use error::{DomainError, HandlerError, HandlerResult};
pub use shape::{Field, ObjectShape, Primitive, Shape};
pub use validation::{validate, ValidationResult, Violation};
