// Self-Description Generator - machine-readable contract document

use crate::application::registry::ContractRegistry;
use crate::domain::{ErrorSpec, HttpMethod, OperationSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full description of the service surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDocument {
    pub title: String,
    pub version: String,
    pub operations: Vec<OperationDoc>,
}

/// One operation: route, metadata, schemas and error catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDoc {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// JSON Schema of the input; absent when the operation takes none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    pub output: Value,
    #[serde(default)]
    pub errors: Vec<ErrorDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDoc {
    pub kind: String,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ContractDocument {
    pub fn operation(&self, name: &str) -> Option<&OperationDoc> {
        self.operations.iter().find(|op| op.name == name)
    }
}

/// Walk the registry and produce its description document
pub fn describe(registry: &ContractRegistry, title: &str, version: &str) -> ContractDocument {
    ContractDocument {
        title: title.to_string(),
        version: version.to_string(),
        operations: registry
            .describe()
            .iter()
            .map(|spec| describe_operation(spec))
            .collect(),
    }
}

fn describe_operation(spec: &OperationSpec) -> OperationDoc {
    OperationDoc {
        name: spec.name.to_string(),
        method: spec.method,
        path: spec.path.to_string(),
        summary: spec.meta.summary.map(str::to_string),
        description: spec.meta.description.map(str::to_string),
        tags: spec.meta.tags.iter().map(|t| t.to_string()).collect(),
        input: spec.input.as_ref().map(|shape| shape.to_json_schema()),
        output: spec.output.to_json_schema(),
        errors: spec.errors.iter().map(describe_error).collect(),
    }
}

fn describe_error(error: &ErrorSpec) -> ErrorDoc {
    ErrorDoc {
        kind: error.kind.to_string(),
        status: error.status,
        message: error.message.to_string(),
        data: error.data.as_ref().map(|shape| shape.to_json_schema()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, Shape};
    use serde_json::json;

    fn registry() -> ContractRegistry {
        ContractRegistry::new()
            .with(
                OperationSpec::new("greet", HttpMethod::Post, "/greet")
                    .summary("Greet")
                    .tags(&["Greetings"])
                    .input(Shape::object(vec![Field::new("name", Shape::string())]))
                    .output(Shape::object(vec![Field::new("message", Shape::string())]))
                    .error(ErrorSpec::new("NOPE", "Nope").with_data(Shape::object(vec![
                        Field::new("reason", Shape::string()),
                    ]))),
            )
            .unwrap()
            .with(OperationSpec::new("ping", HttpMethod::Get, "/ping"))
            .unwrap()
    }

    #[test]
    fn test_every_operation_described_once() {
        let doc = describe(&registry(), "test", "1.0.0");

        assert_eq!(doc.operations.len(), 2);
        assert_eq!(doc.operations[0].name, "greet");
        assert_eq!(doc.operations[1].name, "ping");
        assert!(doc.operation("ping").unwrap().input.is_none());
    }

    #[test]
    fn test_schemas_and_errors_are_intact() {
        let doc = describe(&registry(), "test", "1.0.0");
        let greet = doc.operation("greet").unwrap();

        assert_eq!(greet.method, HttpMethod::Post);
        assert_eq!(greet.summary.as_deref(), Some("Greet"));
        assert_eq!(greet.tags, vec!["Greetings"]);
        assert_eq!(greet.input.as_ref().unwrap()["required"], json!(["name"]));
        assert_eq!(greet.errors.len(), 1);
        assert_eq!(greet.errors[0].kind, "NOPE");
        assert_eq!(greet.errors[0].status, 500);
        assert_eq!(
            greet.errors[0].data.as_ref().unwrap()["properties"]["reason"]["type"],
            "string"
        );
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = describe(&registry(), "test", "1.0.0");
        let text = serde_json::to_string(&doc).unwrap();
        let back: ContractDocument = serde_json::from_str(&text).unwrap();

        assert_eq!(back, doc);
    }
}
