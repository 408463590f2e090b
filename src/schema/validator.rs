//! Schema validator for untyped instances
//!
//! Validation semantics:
//! - Root type (if declared) is checked first
//! - Every required property must be present; a non-object instance has
//!   no properties, so it reports every required property as missing
//! - Every declared property that is present must match its type
//! - Undeclared properties are ignored
//!
//! All violations are collected; there is no early exit. Report order is
//! root type, then missing properties, then type mismatches, each in
//! schema declaration order.

use serde_json::{Map, Value};

use super::errors::{SchemaResult, ValidationError, Violation};
use super::types::Schema;

/// Validates `value` against `schema`.
///
/// # Errors
///
/// Returns `ValidationError` carrying every violation found, in
/// deterministic report order.
pub fn validate(schema: &Schema, value: &Value) -> SchemaResult<()> {
    let mut violations = Vec::new();

    if let Some(root_type) = schema.root_type() {
        if !root_type.matches(value) {
            violations.push(Violation::instance_type_mismatch(root_type));
        }
    }

    let properties = value.as_object();
    check_presence(schema, properties, &mut violations);
    if let Some(properties) = properties {
        check_types(schema, properties, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(schema.schema_id(), violations))
    }
}

fn check_presence(
    schema: &Schema,
    properties: Option<&Map<String, Value>>,
    violations: &mut Vec<Violation>,
) {
    for name in schema.required_fields() {
        let present = properties.is_some_and(|p| p.contains_key(name));
        if !present {
            violations.push(Violation::missing_property(name));
        }
    }
}

fn check_types(schema: &Schema, properties: &Map<String, Value>, violations: &mut Vec<Violation>) {
    for field in schema.fields() {
        if let Some(value) = properties.get(&field.name) {
            if !field.field_type.matches(value) {
                violations.push(Violation::type_mismatch(&field.name, field.field_type));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;
    use serde_json::json;

    fn user_schema() -> Schema {
        Schema::new("users")
            .required("id", FieldType::String)
            .optional("age", FieldType::Integer)
            .required("name", FieldType::String)
            .optional("active", FieldType::Boolean)
    }

    #[test]
    fn test_valid_document_passes() {
        let doc = json!({ "id": "u1", "name": "Alice" });
        assert!(validate(&user_schema(), &doc).is_ok());
    }

    #[test]
    fn test_valid_document_with_optional_fields() {
        let doc = json!({ "id": "u1", "name": "Alice", "age": 30, "active": true });
        assert!(validate(&user_schema(), &doc).is_ok());
    }

    #[test]
    fn test_undeclared_fields_ignored() {
        let doc = json!({ "id": "u1", "name": "Alice", "nickname": 7 });
        assert!(validate(&user_schema(), &doc).is_ok());
    }

    #[test]
    fn test_missing_fields_in_declaration_order() {
        let doc = json!({ "age": 3 });
        let err = validate(&user_schema(), &doc).unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                r#"instance requires property "id""#,
                r#"instance requires property "name""#,
            ]
        );
        assert_eq!(err.schema_id(), "users");
    }

    #[test]
    fn test_type_mismatches_follow_schema_not_input_order() {
        // Keys in reverse order of declaration.
        let doc = json!({ "active": "yes", "name": 1, "age": "3", "id": null });
        let err = validate(&user_schema(), &doc).unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "instance.id is not of a type(s) string",
                "instance.age is not of a type(s) integer",
                "instance.name is not of a type(s) string",
                "instance.active is not of a type(s) boolean",
            ]
        );
    }

    #[test]
    fn test_missing_before_mismatch() {
        let doc = json!({ "age": 2.5, "name": false });
        let err = validate(&user_schema(), &doc).unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                r#"instance requires property "id""#,
                "instance.age is not of a type(s) integer",
                "instance.name is not of a type(s) string",
            ]
        );
    }

    #[test]
    fn test_non_object_reports_required_only() {
        for doc in [json!("a string"), json!(42), json!(null), json!([1, 2])] {
            let err = validate(&user_schema(), &doc).unwrap_err();
            assert_eq!(
                err.messages(),
                vec![
                    r#"instance requires property "id""#,
                    r#"instance requires property "name""#,
                ]
            );
        }
    }

    #[test]
    fn test_partial_schema_skips_presence() {
        let schema = user_schema().partial("users-patch");
        assert!(validate(&schema, &json!({})).is_ok());
        assert!(validate(&schema, &json!({ "age": 4 })).is_ok());

        let err = validate(&schema, &json!({ "age": "4" })).unwrap_err();
        assert_eq!(err.messages(), vec!["instance.age is not of a type(s) integer"]);
    }

    #[test]
    fn test_root_type_mismatch() {
        let schema = user_schema()
            .with_root_type(FieldType::Object)
            .partial("users-patch");
        let err = validate(&schema, &json!("I am a string")).unwrap_err();
        assert_eq!(err.messages(), vec!["instance is not of a type(s) object"]);
        assert!(validate(&schema, &json!({})).is_ok());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let doc = json!({ "name": 1, "active": 0 });
        let first = validate(&user_schema(), &doc).unwrap_err();
        for _ in 0..50 {
            assert_eq!(validate(&user_schema(), &doc).unwrap_err(), first);
        }
    }
}
