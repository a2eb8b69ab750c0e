// Dispatcher - resolves, validates, invokes and wraps

use crate::application::panic_guard::execute_guarded;
use crate::application::registry::ContractRegistry;
use crate::domain::{
    validate, DomainError, Envelope, Failure, HandlerError, HandlerResult, OperationSpec, Request,
    ValidationResult,
};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Business logic bound to one operation.
///
/// Receives the validated, coerced input (`null` when the operation declares
/// no input) and returns a success value or a handler error.
#[async_trait]
pub trait OperationHandler: Send + Sync {
    async fn handle(&self, input: Value) -> HandlerResult;
}

/// Assembles a [`Dispatcher`], checking handler bindings against the registry
pub struct DispatcherBuilder {
    registry: Arc<ContractRegistry>,
    handlers: HashMap<&'static str, Arc<dyn OperationHandler>>,
}

impl DispatcherBuilder {
    /// Bind a handler to a registered operation name
    pub fn bind(mut self, name: &str, handler: Arc<dyn OperationHandler>) -> Result<Self> {
        let spec = self
            .registry
            .get(name)
            .ok_or_else(|| AppError::UnknownOperation(name.to_string()))?;

        if self.handlers.contains_key(spec.name) {
            return Err(AppError::DuplicateHandler(name.to_string()));
        }
        self.handlers.insert(spec.name, handler);
        Ok(self)
    }

    /// Finish assembly; every registered operation must have a handler
    pub fn build(self) -> Result<Dispatcher> {
        if let Some(unbound) = self
            .registry
            .describe()
            .iter()
            .find(|spec| !self.handlers.contains_key(spec.name))
        {
            return Err(AppError::MissingHandler(unbound.name.to_string()));
        }

        Ok(Dispatcher {
            registry: self.registry,
            handlers: self.handlers,
        })
    }
}

/// Routes requests through the contract.
///
/// Holds no mutable state; share it behind an `Arc` across transports.
pub struct Dispatcher {
    registry: Arc<ContractRegistry>,
    handlers: HashMap<&'static str, Arc<dyn OperationHandler>>,
}

impl Dispatcher {
    pub fn builder(registry: Arc<ContractRegistry>) -> DispatcherBuilder {
        DispatcherBuilder {
            registry,
            handlers: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &Arc<ContractRegistry> {
        &self.registry
    }

    /// Handle a request addressed by method + path
    pub async fn handle(&self, request: Request) -> Envelope {
        let Some(spec) = self.registry.resolve(request.method, &request.path) else {
            info!(
                method = %request.method,
                path = %request.path,
                outcome = "NOT_MATCHED",
                "Dispatch completed"
            );
            let target = format!("{} {}", request.method, request.path);
            return Envelope::Failure(Failure::not_matched(&target));
        };

        self.run(spec, request.body).await
    }

    /// Handle a request addressed by operation name
    pub async fn call(&self, name: &str, body: Value) -> Envelope {
        let Some(spec) = self.registry.get(name) else {
            info!(operation = %name, outcome = "NOT_MATCHED", "Dispatch completed");
            return Envelope::Failure(Failure::not_matched(name));
        };

        self.run(spec, body).await
    }

    async fn run(&self, spec: &OperationSpec, body: Value) -> Envelope {
        let started = Instant::now();
        debug!(operation = spec.name, method = %spec.method, path = spec.path, "Dispatch started");

        let envelope = self.execute(spec, body).await;

        info!(
            operation = spec.name,
            outcome = envelope.outcome(),
            status = envelope.status(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dispatch completed"
        );
        envelope
    }

    async fn execute(&self, spec: &OperationSpec, body: Value) -> Envelope {
        // 1. Input validation (body ignored when no input is declared)
        let input = match &spec.input {
            Some(shape) => match validate(&body, shape) {
                ValidationResult::Valid(value) => value,
                ValidationResult::Invalid(violations) => {
                    debug!(
                        operation = spec.name,
                        violations = violations.len(),
                        "Input rejected"
                    );
                    return Envelope::Failure(Failure::validation_failed(violations));
                }
            },
            None => Value::Null,
        };

        let Some(handler) = self.handlers.get(spec.name) else {
            error!(operation = spec.name, "No handler bound");
            return Envelope::Failure(Failure::internal());
        };

        // 2. Invocation
        let outcome = match execute_guarded(spec.name, handler.handle(input)).await {
            Ok(outcome) => outcome,
            Err(_) => return Envelope::Failure(Failure::internal()),
        };

        // 3. Result mapping
        match outcome {
            Ok(output) => match validate(&output, &spec.output) {
                ValidationResult::Valid(value) => Envelope::success(value),
                ValidationResult::Invalid(violations) => {
                    error!(
                        operation = spec.name,
                        violations = ?violations,
                        "Handler output violates the declared output shape"
                    );
                    Envelope::Failure(Failure::internal())
                }
            },
            Err(HandlerError::Domain(err)) => Envelope::Failure(map_domain_error(spec, err)),
            Err(HandlerError::Internal(err)) => {
                error!(operation = spec.name, error = %err, "Handler failed");
                Envelope::Failure(Failure::internal())
            }
        }
    }
}

/// Map a raised domain error onto the operation's declared error catalog
fn map_domain_error(spec: &OperationSpec, err: DomainError) -> Failure {
    let Some(declared) = spec.error_spec(&err.kind) else {
        error!(operation = spec.name, kind = %err.kind, "Handler raised an undeclared error kind");
        return Failure::internal();
    };

    let data = match (&declared.data, err.data) {
        (Some(shape), data) => match validate(&data.unwrap_or(Value::Null), shape) {
            ValidationResult::Valid(Value::Null) => None,
            ValidationResult::Valid(value) => Some(value),
            ValidationResult::Invalid(violations) => {
                error!(
                    operation = spec.name,
                    kind = declared.kind,
                    violations = ?violations,
                    "Error data violates the declared data shape"
                );
                return Failure::internal();
            }
        },
        (None, Some(_)) => {
            warn!(
                operation = spec.name,
                kind = declared.kind,
                "Dropping error data: no data shape declared"
            );
            None
        }
        (None, None) => None,
    };

    Failure {
        kind: declared.kind.to_string(),
        status: declared.status,
        message: err.message.unwrap_or_else(|| declared.message.to_string()),
        data,
    }
}
