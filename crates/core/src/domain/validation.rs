// Schema Validator - checks untyped values against declared shapes

use crate::domain::shape::{display_path, join_path, Primitive, Shape};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z$")
        .expect("timestamp pattern is valid")
});

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dot-path to the offending field ("" for the root value)
    pub path: String,
    pub reason: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", display_path(&self.path), self.reason)
    }
}

/// Outcome of validating a value against a shape
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Coerced value (unknown object fields removed)
    Valid(Value),
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Validate `value` against `shape`, collecting every violation.
///
/// A `null` root value is treated as absent.
pub fn validate(value: &Value, shape: &Shape) -> ValidationResult {
    let present = if value.is_null() { None } else { Some(value) };
    let mut violations = Vec::new();
    let coerced = check(present, shape, "", &mut violations);

    if violations.is_empty() {
        ValidationResult::Valid(coerced.unwrap_or(Value::Null))
    } else {
        ValidationResult::Invalid(violations)
    }
}

fn check(
    value: Option<&Value>,
    shape: &Shape,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<Value> {
    let value = match (value, shape) {
        (None, Shape::Optional(_) | Shape::Any) => return None,
        (None, _) => {
            violations.push(violation(path, "required value is missing".to_string()));
            return None;
        }
        (Some(value), _) => value,
    };

    match shape {
        Shape::Primitive(kind) => match check_primitive(value, *kind) {
            Ok(()) => Some(value.clone()),
            Err(reason) => {
                violations.push(violation(path, reason));
                None
            }
        },
        Shape::Enum(literals) => match value.as_str() {
            Some(s) if literals.contains(&s) => Some(value.clone()),
            _ => {
                violations.push(violation(
                    path,
                    format!(
                        "expected one of [{}], received {}",
                        literals.join(", "),
                        describe_value(value)
                    ),
                ));
                None
            }
        },
        Shape::Object(object) => {
            let Some(map) = value.as_object() else {
                violations.push(violation(
                    path,
                    format!("expected object, received {}", type_name(value)),
                ));
                return None;
            };

            let mut coerced = Map::new();
            for field in &object.fields {
                let child_path = join_path(path, field.name);
                if let Some(child) = check(map.get(field.name), &field.shape, &child_path, violations) {
                    coerced.insert(field.name.to_string(), child);
                }
            }
            Some(Value::Object(coerced))
        }
        Shape::Optional(inner) => check(Some(value), inner, path, violations),
        Shape::Any => Some(value.clone()),
    }
}

fn check_primitive(value: &Value, kind: Primitive) -> Result<(), String> {
    let mismatch = || format!("expected {}, received {}", kind, type_name(value));

    match kind {
        Primitive::String => value.as_str().map(|_| ()).ok_or_else(mismatch),
        Primitive::Number => {
            if value.is_number() {
                Ok(())
            } else {
                Err(mismatch())
            }
        }
        Primitive::Boolean => value.as_bool().map(|_| ()).ok_or_else(mismatch),
        Primitive::Email => {
            let s = value.as_str().ok_or_else(mismatch)?;
            if is_email(s) {
                Ok(())
            } else {
                Err(format!("invalid email address '{}'", s))
            }
        }
        Primitive::Timestamp => {
            let s = value.as_str().ok_or_else(mismatch)?;
            if is_timestamp(s) {
                Ok(())
            } else {
                Err(format!("invalid ISO-8601 UTC datetime '{}'", s))
            }
        }
    }
}

fn is_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL_RE.is_match(s)
}

fn is_timestamp(s: &str) -> bool {
    TIMESTAMP_RE.is_match(s) && chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

fn violation(path: &str, reason: String) -> Violation {
    Violation {
        path: path.to_string(),
        reason,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => type_name(other).to_string(),
    }
}
