// Contract Registry - static description of the service surface

use crate::domain::{HttpMethod, OperationSpec};
use crate::error::{AppError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Registry of operations, keyed by route and by name.
///
/// Built once at startup; read-only afterwards, so a shared `Arc` can be
/// resolved from any number of tasks without locking.
#[derive(Debug, Default)]
pub struct ContractRegistry {
    operations: Vec<Arc<OperationSpec>>,
    by_route: HashMap<&'static str, HashMap<HttpMethod, usize>>,
    by_name: HashMap<&'static str, usize>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation.
    ///
    /// Fails on a duplicate (method, path) pair, a duplicate name, a
    /// duplicate error kind, or a shape that breaks its invariants.
    pub fn register(&mut self, spec: OperationSpec) -> Result<()> {
        if let Some(&idx) = self
            .by_route
            .get(spec.path)
            .and_then(|methods| methods.get(&spec.method))
        {
            return Err(AppError::DuplicateRoute {
                method: spec.method.to_string(),
                path: spec.path.to_string(),
                existing: self.operations[idx].name.to_string(),
            });
        }
        if self.by_name.contains_key(spec.name) {
            return Err(AppError::DuplicateOperation(spec.name.to_string()));
        }
        check_spec(&spec)?;

        debug!(
            operation = spec.name,
            method = %spec.method,
            path = spec.path,
            "Registering operation"
        );

        let idx = self.operations.len();
        self.by_route
            .entry(spec.path)
            .or_default()
            .insert(spec.method, idx);
        self.by_name.insert(spec.name, idx);
        self.operations.push(Arc::new(spec));
        Ok(())
    }

    /// Builder-style registration
    pub fn with(mut self, spec: OperationSpec) -> Result<Self> {
        self.register(spec)?;
        Ok(self)
    }

    /// Exact-match route lookup
    pub fn resolve(&self, method: HttpMethod, path: &str) -> Option<&Arc<OperationSpec>> {
        self.by_route
            .get(path)
            .and_then(|methods| methods.get(&method))
            .map(|&idx| &self.operations[idx])
    }

    /// Lookup by operation name (for name-addressed transports)
    pub fn get(&self, name: &str) -> Option<&Arc<OperationSpec>> {
        self.by_name.get(name).map(|&idx| &self.operations[idx])
    }

    /// All operations in registration order
    pub fn describe(&self) -> &[Arc<OperationSpec>] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

fn check_spec(spec: &OperationSpec) -> Result<()> {
    let invalid = |reason: String| AppError::InvalidContract {
        operation: spec.name.to_string(),
        reason,
    };

    if !spec.path.starts_with('/') {
        return Err(invalid(format!("path '{}' must start with '/'", spec.path)));
    }
    if let Some(input) = &spec.input {
        input.check().map_err(|e| invalid(format!("input {}", e)))?;
    }
    spec.output
        .check()
        .map_err(|e| invalid(format!("output {}", e)))?;

    let mut kinds = HashSet::new();
    for error in &spec.errors {
        if !kinds.insert(error.kind) {
            return Err(invalid(format!("duplicate error kind '{}'", error.kind)));
        }
        if let Some(data) = &error.data {
            data.check()
                .map_err(|e| invalid(format!("error {} data {}", error.kind, e)))?;
        }
    }
    Ok(())
}
