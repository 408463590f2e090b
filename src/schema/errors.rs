//! Schema violation types
//!
//! Message templates are part of the external contract and must stay
//! byte-for-byte stable:
//! - `instance requires property "<field>"`
//! - `instance.<field> is not of a type(s) <type>`
//! - `instance is not of a type(s) <type>` (whole-instance mismatch)

use std::fmt;

use super::types::FieldType;

/// Name of the validated value in violation messages
const INSTANCE: &str = "instance";

/// One schema non-conformance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Required property absent
    MissingProperty {
        /// Property name
        property: String,
    },
    /// Present value of the wrong runtime type
    TypeMismatch {
        /// Property name, or `None` for the instance itself
        property: Option<String>,
        /// Declared type
        expected: FieldType,
    },
}

impl Violation {
    pub fn missing_property(property: impl Into<String>) -> Self {
        Violation::MissingProperty {
            property: property.into(),
        }
    }

    pub fn type_mismatch(property: impl Into<String>, expected: FieldType) -> Self {
        Violation::TypeMismatch {
            property: Some(property.into()),
            expected,
        }
    }

    pub fn instance_type_mismatch(expected: FieldType) -> Self {
        Violation::TypeMismatch {
            property: None,
            expected,
        }
    }

    /// Returns the property this violation is about, if any
    pub fn property(&self) -> Option<&str> {
        match self {
            Violation::MissingProperty { property } => Some(property),
            Violation::TypeMismatch { property, .. } => property.as_deref(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingProperty { property } => {
                write!(f, "{} requires property \"{}\"", INSTANCE, property)
            }
            Violation::TypeMismatch {
                property: Some(property),
                expected,
            } => write!(f, "{}.{} is not of a type(s) {}", INSTANCE, property, expected),
            Violation::TypeMismatch {
                property: None,
                expected,
            } => write!(f, "{} is not of a type(s) {}", INSTANCE, expected),
        }
    }
}

/// Ordered, non-empty list of violations for one instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    schema_id: String,
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(schema_id: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            schema_id: schema_id.into(),
            violations,
        }
    }

    /// Returns the identifier of the schema that rejected the instance
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Returns the violations in report order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the externally visible violation messages, in report order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instance failed schema '{}': ", self.schema_id)?;
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, ValidationError>;
