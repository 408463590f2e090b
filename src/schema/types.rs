//! Schema type definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - integer: number without a fractional part, representable as i64
//! - number: any JSON number
//! - boolean
//! - object
//! - array
//! - null

use std::fmt;

use serde_json::Value;

/// Declared type of a field (or of the whole instance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Whole number
    Integer,
    /// Any number, integer or floating
    Number,
    /// Boolean
    Boolean,
    /// JSON object
    Object,
    /// JSON array
    Array,
    /// JSON null
    Null,
}

impl FieldType {
    /// Returns the type name used in violation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Null => "null",
        }
    }

    /// Returns true if the runtime type of `value` satisfies this type.
    ///
    /// No coercion: `"555"` is not an integer and `null` is not a string.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => as_integer(value).is_some(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array => value.is_array(),
            FieldType::Null => value.is_null(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Reads a JSON number as an integer.
///
/// `264` and `264.0` both yield `Some(264)`; `2.5` and out-of-range
/// numbers yield `None`.
pub fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A single declared property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Property name as it appears in the instance
    pub name: String,
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

/// Declarative set of field constraints.
///
/// Properties keep their declaration order; violations are reported in
/// that order regardless of the order of keys in the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    schema_id: String,
    root_type: Option<FieldType>,
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Create an empty schema
    pub fn new(schema_id: impl Into<String>) -> Self {
        Self {
            schema_id: schema_id.into(),
            root_type: None,
            fields: Vec::new(),
        }
    }

    /// Require the instance itself to be of the given type
    pub fn with_root_type(mut self, root_type: FieldType) -> Self {
        self.root_type = Some(root_type);
        self
    }

    /// Declare a required property
    pub fn required(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.field(name, field_type, true)
    }

    /// Declare an optional property
    pub fn optional(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.field(name, field_type, false)
    }

    fn field(mut self, name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        let name = name.into();
        // Redeclaring a property replaces it in place.
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => {
                existing.field_type = field_type;
                existing.required = required;
            }
            None => self.fields.push(FieldDef {
                name,
                field_type,
                required,
            }),
        }
        self
    }

    /// Returns the schema identifier
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Returns the declared root type, if any
    pub fn root_type(&self) -> Option<FieldType> {
        self.root_type
    }

    /// Returns the declared properties in declaration order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the required property names in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }

    /// Returns a copy of this schema with no required properties
    pub fn partial(&self, schema_id: impl Into<String>) -> Self {
        Self {
            schema_id: schema_id.into(),
            root_type: self.root_type,
            fields: self
                .fields
                .iter()
                .map(|f| FieldDef {
                    required: false,
                    ..f.clone()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new("users")
            .required("id", FieldType::String)
            .optional("age", FieldType::Integer)
            .required("name", FieldType::String)
    }

    #[test]
    fn test_declaration_order_preserved() {
        let schema = sample_schema();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "age", "name"]);
        assert_eq!(schema.required_fields().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn test_redeclared_field_keeps_position() {
        let schema = sample_schema().optional("id", FieldType::Integer);
        assert_eq!(schema.fields()[0].name, "id");
        assert_eq!(schema.fields()[0].field_type, FieldType::Integer);
        assert!(!schema.fields()[0].required);
        assert_eq!(schema.fields().len(), 3);
    }

    #[test]
    fn test_partial_drops_required() {
        let partial = sample_schema()
            .with_root_type(FieldType::Object)
            .partial("users-patch");
        assert_eq!(partial.schema_id(), "users-patch");
        assert_eq!(partial.required_fields().count(), 0);
        assert_eq!(partial.fields().len(), 3);
        assert_eq!(partial.root_type(), Some(FieldType::Object));
    }

    #[test]
    fn test_integer_semantics() {
        assert_eq!(as_integer(&json!(264)), Some(264));
        assert_eq!(as_integer(&json!(264.0)), Some(264));
        assert_eq!(as_integer(&json!(-3)), Some(-3));
        assert_eq!(as_integer(&json!(2.5)), None);
        assert_eq!(as_integer(&json!("555")), None);
        assert_eq!(as_integer(&json!(u64::MAX)), None);
    }

    #[test]
    fn test_type_matching_is_strict() {
        assert!(FieldType::String.matches(&json!("x")));
        assert!(!FieldType::String.matches(&json!(null)));
        assert!(!FieldType::String.matches(&json!(5555555555u64)));
        assert!(!FieldType::String.matches(&json!(false)));
        assert!(FieldType::Number.matches(&json!(2.5)));
        assert!(!FieldType::Integer.matches(&json!(2.5)));
        assert!(FieldType::Null.matches(&json!(null)));
        assert!(FieldType::Object.matches(&json!({})));
        assert!(!FieldType::Object.matches(&json!("a string")));
        assert!(FieldType::Array.matches(&json!([])));
        assert!(FieldType::Boolean.matches(&json!(true)));
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Integer.type_name(), "integer");
        assert_eq!(FieldType::Number.type_name(), "number");
        assert_eq!(FieldType::Boolean.type_name(), "boolean");
        assert_eq!(FieldType::Object.to_string(), "object");
        assert_eq!(FieldType::Array.to_string(), "array");
        assert_eq!(FieldType::Null.to_string(), "null");
    }
}
