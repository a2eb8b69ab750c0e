// hello - greets the one accepted name

use crate::api::{error_kind, HelloInput, HelloOutput, InvalidNameData};
use crate::application::dispatcher::OperationHandler;
use crate::domain::{DomainError, HandlerResult};
use async_trait::async_trait;
use serde_json::Value;

const ACCEPTED_NAME: &str = "yoo";
const DEMO_BAD_NAME: &str = "woo";

pub struct HelloHandler;

/// Greeting policy: "woo" is a bad request, anything but "yoo" is invalid
pub fn greet(input: &HelloInput) -> Result<HelloOutput, DomainError> {
    if input.name == DEMO_BAD_NAME {
        return Err(DomainError::new(error_kind::BAD_REQUEST)
            .with_message("This is a bad request error thrown for demonstration purposes."));
    }

    if input.name != ACCEPTED_NAME {
        let data = InvalidNameData {
            provided_name: input.name.clone(),
        };
        return Err(DomainError::new(error_kind::INVALID_NAME)
            .with_message(format!(
                "Name '{}' is not allowed. Only '{}' is accepted.",
                input.name, ACCEPTED_NAME
            ))
            .with_data(serde_json::to_value(data).unwrap_or(Value::Null)));
    }

    Ok(HelloOutput {
        message: format!("Hello, {}!", input.name),
    })
}

#[async_trait]
impl OperationHandler for HelloHandler {
    async fn handle(&self, input: Value) -> HandlerResult {
        let input: HelloInput = serde_json::from_value(input)?;
        let output = greet(&input)?;
        Ok(serde_json::to_value(output)?)
    }
}
