// Shape Model - structural description of contract values

use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Primitive value kinds understood by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    /// ISO-8601 datetime string in UTC
    Timestamp,
    Email,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Timestamp => "timestamp",
            Primitive::Email => "email",
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named field of an object shape
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub description: Option<&'static str>,
}

impl Field {
    pub fn new(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            description: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// A field is required unless its shape is optional-wrapped
    pub fn is_required(&self) -> bool {
        !self.shape.is_optional()
    }
}

/// Object shape: ordered fields plus an optional description
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectShape {
    pub fields: Vec<Field>,
    pub description: Option<&'static str>,
}

/// Recursive description of an expected value
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Primitive(Primitive),
    Object(ObjectShape),
    Enum(Vec<&'static str>),
    Optional(Box<Shape>),
    /// Accepts any value, including absence
    Any,
}

impl Shape {
    pub fn string() -> Self {
        Shape::Primitive(Primitive::String)
    }

    pub fn number() -> Self {
        Shape::Primitive(Primitive::Number)
    }

    pub fn boolean() -> Self {
        Shape::Primitive(Primitive::Boolean)
    }

    pub fn timestamp() -> Self {
        Shape::Primitive(Primitive::Timestamp)
    }

    pub fn email() -> Self {
        Shape::Primitive(Primitive::Email)
    }

    pub fn any() -> Self {
        Shape::Any
    }

    pub fn object(fields: Vec<Field>) -> Self {
        Shape::Object(ObjectShape {
            fields,
            description: None,
        })
    }

    pub fn enumeration(literals: &[&'static str]) -> Self {
        Shape::Enum(literals.to_vec())
    }

    pub fn optional(self) -> Self {
        match self {
            // optional(optional(x)) == optional(x)
            Shape::Optional(_) => self,
            other => Shape::Optional(Box::new(other)),
        }
    }

    /// Attach a description to an object shape (no-op for other kinds)
    pub fn describe(self, description: &'static str) -> Self {
        match self {
            Shape::Object(mut object) => {
                object.description = Some(description);
                Shape::Object(object)
            }
            other => other,
        }
    }

    /// Absence is accepted (optional-wrapped or `Any`)
    pub fn is_optional(&self) -> bool {
        matches!(self, Shape::Optional(_) | Shape::Any)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Shape::Any)
    }

    /// Check structural invariants (unique field names, non-empty enums).
    ///
    /// Returns a description of the first problem found, prefixed with the
    /// dot-path of the offending node.
    pub fn check(&self) -> Result<(), String> {
        self.check_at("")
    }

    fn check_at(&self, path: &str) -> Result<(), String> {
        match self {
            Shape::Primitive(_) | Shape::Any => Ok(()),
            Shape::Optional(inner) => inner.check_at(path),
            Shape::Enum(literals) => {
                if literals.is_empty() {
                    return Err(format!("{}: enum has no literals", display_path(path)));
                }
                let mut seen = HashSet::new();
                for literal in literals {
                    if !seen.insert(*literal) {
                        return Err(format!(
                            "{}: duplicate enum literal '{}'",
                            display_path(path),
                            literal
                        ));
                    }
                }
                Ok(())
            }
            Shape::Object(object) => {
                let mut seen = HashSet::new();
                for field in &object.fields {
                    if !seen.insert(field.name) {
                        return Err(format!(
                            "{}: duplicate field '{}'",
                            display_path(path),
                            field.name
                        ));
                    }
                    field.shape.check_at(&join_path(path, field.name))?;
                }
                Ok(())
            }
        }
    }

    /// Render the shape in JSON Schema notation
    pub fn to_json_schema(&self) -> Value {
        match self {
            Shape::Primitive(Primitive::String) => json!({ "type": "string" }),
            Shape::Primitive(Primitive::Number) => json!({ "type": "number" }),
            Shape::Primitive(Primitive::Boolean) => json!({ "type": "boolean" }),
            Shape::Primitive(Primitive::Timestamp) => {
                json!({ "type": "string", "format": "date-time" })
            }
            Shape::Primitive(Primitive::Email) => json!({ "type": "string", "format": "email" }),
            Shape::Enum(literals) => json!({ "type": "string", "enum": literals }),
            Shape::Any => json!({}),
            // Optionality is expressed by the parent's `required` list
            Shape::Optional(inner) => inner.to_json_schema(),
            Shape::Object(object) => {
                let mut properties = Map::new();
                let mut required = Vec::new();
                for field in &object.fields {
                    let schema = describe_field(field.shape.to_json_schema(), field.description);
                    properties.insert(field.name.to_string(), schema);
                    if field.is_required() {
                        required.push(field.name);
                    }
                }

                let mut schema = Map::new();
                schema.insert("type".to_string(), json!("object"));
                if let Some(description) = object.description {
                    schema.insert("description".to_string(), json!(description));
                }
                schema.insert("properties".to_string(), Value::Object(properties));
                schema.insert("required".to_string(), json!(required));
                Value::Object(schema)
            }
        }
    }
}

/// Attach a field description without losing the nested shape's own one
fn describe_field(schema: Value, description: Option<&'static str>) -> Value {
    let Some(description) = description else {
        return schema;
    };

    match schema {
        Value::Object(mut map) if !map.contains_key("description") => {
            map.insert("description".to_string(), json!(description));
            Value::Object(map)
        }
        nested => json!({ "description": description, "allOf": [nested] }),
    }
}

pub(crate) fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}

pub(crate) fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_shape() -> Shape {
        Shape::object(vec![
            Field::new("id", Shape::string()).describe("Unique user identifier"),
            Field::new("email", Shape::email()),
            Field::new("role", Shape::enumeration(&["admin", "user", "guest"])),
            Field::new("nickname", Shape::string().optional()),
        ])
        .describe("User model")
    }

    #[test]
    fn test_field_required_follows_optional_wrapper() {
        let required = Field::new("id", Shape::string());
        let optional = Field::new("id", Shape::string().optional());

        assert!(required.is_required());
        assert!(!optional.is_required());
    }

    #[test]
    fn test_optional_does_not_nest() {
        let shape = Shape::string().optional().optional();
        assert_eq!(shape, Shape::Optional(Box::new(Shape::string())));
    }

    #[test]
    fn test_check_rejects_duplicate_fields() {
        let shape = Shape::object(vec![
            Field::new("user", Shape::object(vec![
                Field::new("id", Shape::string()),
                Field::new("id", Shape::number()),
            ])),
        ]);

        let err = shape.check().unwrap_err();
        assert!(err.contains("user"));
        assert!(err.contains("duplicate field 'id'"));
    }

    #[test]
    fn test_check_rejects_bad_enums() {
        assert!(Shape::enumeration(&[]).check().is_err());
        assert!(Shape::enumeration(&["a", "a"]).check().is_err());
        assert!(Shape::enumeration(&["a", "A"]).check().is_ok());
    }

    #[test]
    fn test_json_schema_rendering() {
        let schema = user_shape().to_json_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["description"], "User model");
        assert_eq!(schema["properties"]["id"]["description"], "Unique user identifier");
        assert_eq!(schema["properties"]["email"]["format"], "email");
        assert_eq!(
            schema["properties"]["role"]["enum"],
            json!(["admin", "user", "guest"])
        );
        assert_eq!(schema["properties"]["nickname"]["type"], "string");
        assert_eq!(schema["required"], json!(["id", "email", "role"]));
    }

    #[test]
    fn test_nested_object_keeps_both_descriptions() {
        let shape = Shape::object(vec![
            Field::new("user", user_shape().optional()).describe("User if authenticated"),
        ]);

        let user = &shape.to_json_schema()["properties"]["user"];
        assert_eq!(user["description"], "User if authenticated");
        assert_eq!(user["allOf"][0]["description"], "User model");
        assert_eq!(user["allOf"][0]["type"], "object");
    }

    #[test]
    fn test_any_renders_as_empty_schema() {
        assert_eq!(Shape::any().to_json_schema(), json!({}));
        assert!(Shape::any().check().is_ok());
        assert!(!Field::new("extra", Shape::any()).is_required());

        let described = Shape::object(vec![Field::new("extra", Shape::any()).describe("Anything")]);
        assert_eq!(
            described.to_json_schema()["properties"]["extra"],
            json!({"description": "Anything"})
        );
    }
}
