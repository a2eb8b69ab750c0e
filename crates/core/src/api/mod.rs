//! Dashboard API contract
//!
//! The operation surface shared by the backend and its clients: routes,
//! metadata, input/output shapes and declared errors for `hello`, `bye` and
//! `health`.

pub mod models;

pub use models::{
    FarewellResponse, HealthResponse, HelloInput, HelloOutput, InvalidNameData, User, UserRole,
};

use crate::application::ContractRegistry;
use crate::domain::{ErrorSpec, Field, HttpMethod, OperationSpec, Shape};
use crate::error::Result;

pub const TITLE: &str = "Dashboard API";

/// Operation names
pub mod op {
    pub const HELLO: &str = "hello";
    pub const BYE: &str = "bye";
    pub const HEALTH: &str = "health";
}

/// Error kinds declared by `hello`
pub mod error_kind {
    pub const INVALID_NAME: &str = "INVALID_NAME";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
}

pub fn user_shape() -> Shape {
    Shape::object(vec![
        Field::new("id", Shape::string()).describe("Unique user identifier"),
        Field::new("name", Shape::string()).describe("User's display name"),
        Field::new("email", Shape::email()).describe("User's email address"),
        Field::new("role", Shape::enumeration(&["admin", "user", "guest"]))
            .describe("User's role in the system"),
        Field::new("createdAt", Shape::timestamp())
            .describe("ISO 8601 timestamp when user was created"),
        Field::new("isActive", Shape::boolean()).describe("Whether the user account is active"),
    ])
    .describe("User model representing a system user")
}

pub fn farewell_shape() -> Shape {
    Shape::object(vec![
        Field::new("message", Shape::string()).describe("The farewell message"),
        Field::new("user", user_shape().optional()).describe("User information if authenticated"),
        Field::new("timestamp", Shape::timestamp()).describe("When the farewell was generated"),
        Field::new("sessionDuration", Shape::number().optional())
            .describe("Duration of user session in seconds"),
    ])
    .describe("Farewell response containing goodbye message and optional user context")
}

pub fn hello_operation() -> OperationSpec {
    OperationSpec::new(op::HELLO, HttpMethod::Post, "/hello")
        .summary("Say Hello")
        .description(
            "Greets a user by name. This endpoint accepts a name and returns a personalized \
             greeting message. Only the name 'yoo' is accepted - any other name will result in \
             an INVALID_NAME error. The name 'woo' specifically triggers a BAD_REQUEST error for \
             demonstration purposes.",
        )
        .tags(&["Greetings"])
        .input(
            Shape::object(vec![
                Field::new("name", Shape::string()).describe("The name to greet")
            ])
            .describe("Hello request with name parameter"),
        )
        .output(
            Shape::object(vec![
                Field::new("message", Shape::string()).describe("The greeting message")
            ])
            .describe("Hello response with greeting message"),
        )
        .error(
            ErrorSpec::new(error_kind::INVALID_NAME, "Only \"yoo\" is allowed as a name")
                .with_data(Shape::object(vec![Field::new("providedName", Shape::string())])),
        )
        .error(ErrorSpec::new(error_kind::BAD_REQUEST, "Bad request"))
}

pub fn bye_operation() -> OperationSpec {
    OperationSpec::new(op::BYE, HttpMethod::Post, "/bye")
        .summary("Say Goodbye")
        .description(
            "Returns a farewell message with optional user context. This endpoint demonstrates \
             the use of complex data models and shows how authenticated users receive \
             personalized farewell messages with session information.",
        )
        .tags(&["Greetings"])
        .output(farewell_shape())
}

pub fn health_operation() -> OperationSpec {
    OperationSpec::new(op::HEALTH, HttpMethod::Get, "/health")
        .summary("Health Check")
        .description(
            "Performs a health check on the API service. This endpoint is commonly used by \
             monitoring systems, load balancers, and orchestrators to verify that the service \
             is running and responsive. It returns the current status and a timestamp of when \
             the check was performed.",
        )
        .tags(&["System"])
        .input(Shape::any())
        .output(
            Shape::object(vec![
                Field::new("status", Shape::string())
                    .describe("The health status of the service (typically 'ok')"),
                Field::new("timestamp", Shape::string())
                    .describe("ISO 8601 timestamp of when the health check was performed"),
            ])
            .describe("Health check response with status and timestamp"),
        )
}

/// Assemble the dashboard contract registry
pub fn contract() -> Result<ContractRegistry> {
    ContractRegistry::new()
        .with(hello_operation())?
        .with(bye_operation())?
        .with(health_operation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_routes() {
        let registry = contract().unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.resolve(HttpMethod::Post, "/hello").unwrap().name, op::HELLO);
        assert_eq!(registry.resolve(HttpMethod::Post, "/bye").unwrap().name, op::BYE);
        assert_eq!(registry.resolve(HttpMethod::Get, "/health").unwrap().name, op::HEALTH);
    }

    #[test]
    fn test_hello_error_catalog() {
        let hello = hello_operation();

        let invalid = hello.error_spec(error_kind::INVALID_NAME).unwrap();
        assert_eq!(invalid.status, 500);
        assert!(invalid.data.is_some());

        let bad = hello.error_spec(error_kind::BAD_REQUEST).unwrap();
        assert_eq!(bad.status, 400);
        assert!(bad.data.is_none());
    }

    #[test]
    fn test_bye_takes_no_input_and_health_takes_anything() {
        assert!(bye_operation().input.is_none());
        assert_eq!(health_operation().input, Some(Shape::any()));
    }
}
