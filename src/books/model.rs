//! Book entity and its validated input shapes
//!
//! `NewBook::from_value` and `BookPatch::from_value` are the only places
//! an untyped payload becomes a typed value; both validate first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{as_integer, validate, SchemaResult, ValidationError, Violation};
use crate::store::{Row, SqlValue, StoreResult};

use super::schema::{create_schema, update_schema, CREATE_SCHEMA_ID};

/// A stored book. `isbn` is the identity and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: Option<String>,
    pub author: String,
    pub language: Option<String>,
    pub pages: Option<i64>,
    pub publisher: Option<String>,
    pub title: String,
    pub year: Option<i64>,
}

impl Book {
    pub(crate) fn from_row(row: &Row) -> StoreResult<Self> {
        Ok(Self {
            isbn: row.text("isbn")?,
            amazon_url: row.opt_text("amazon_url")?,
            author: row.text("author")?,
            language: row.opt_text("language")?,
            pages: row.opt_integer("pages")?,
            publisher: row.opt_text("publisher")?,
            title: row.text("title")?,
            year: row.opt_integer("year")?,
        })
    }
}

/// Fields for creating a book. Omitted optionals are stored as null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub isbn: String,
    pub amazon_url: Option<String>,
    pub author: String,
    pub language: Option<String>,
    pub pages: Option<i64>,
    pub publisher: Option<String>,
    pub title: String,
    pub year: Option<i64>,
}

impl NewBook {
    /// Validates `value` against the create schema and narrows it.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        validate(&create_schema(), value)?;
        let fields = Fields::new(value);
        Ok(Self {
            isbn: fields.required_text("isbn")?,
            amazon_url: fields.text("amazon_url"),
            author: fields.required_text("author")?,
            language: fields.text("language"),
            pages: fields.integer("pages"),
            publisher: fields.text("publisher"),
            title: fields.required_text("title")?,
            year: fields.integer("year"),
        })
    }

    /// Column values in table order
    pub(crate) fn into_params(self) -> Vec<SqlValue> {
        vec![
            self.isbn.into(),
            self.amazon_url.into(),
            self.author.into(),
            self.language.into(),
            self.pages.into(),
            self.publisher.into(),
            self.title.into(),
            self.year.into(),
        ]
    }
}

/// Partial replacement of a book's fields. `None` leaves the stored
/// value unchanged. There is no `isbn` field: the key cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub amazon_url: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i64>,
    pub publisher: Option<String>,
    pub title: Option<String>,
    pub year: Option<i64>,
}

impl BookPatch {
    /// Validates `value` against the update schema and narrows it.
    /// An `isbn` property is accepted and discarded.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        validate(&update_schema(), value)?;
        let fields = Fields::new(value);
        Ok(Self {
            amazon_url: fields.text("amazon_url"),
            author: fields.text("author"),
            language: fields.text("language"),
            pages: fields.integer("pages"),
            publisher: fields.text("publisher"),
            title: fields.text("title"),
            year: fields.integer("year"),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// Supplied fields as `(column, value)` pairs, in table order
    pub(crate) fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        [
            ("amazon_url", self.amazon_url.as_deref().map(SqlValue::from)),
            ("author", self.author.as_deref().map(SqlValue::from)),
            ("language", self.language.as_deref().map(SqlValue::from)),
            ("pages", self.pages.map(SqlValue::from)),
            ("publisher", self.publisher.as_deref().map(SqlValue::from)),
            ("title", self.title.as_deref().map(SqlValue::from)),
            ("year", self.year.map(SqlValue::from)),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
    }
}

/// Read access to the properties of an already-validated instance
struct Fields<'a> {
    properties: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value) -> Self {
        Self {
            properties: value.as_object(),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.properties.and_then(|p| p.get(name))
    }

    fn text(&self, name: &str) -> Option<String> {
        self.get(name).and_then(Value::as_str).map(str::to_string)
    }

    fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(as_integer)
    }

    fn required_text(&self, name: &str) -> SchemaResult<String> {
        self.text(name).ok_or_else(|| {
            ValidationError::new(CREATE_SCHEMA_ID, vec![Violation::missing_property(name)])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_book_narrowing() {
        let value = json!({
            "isbn": "0691161518",
            "author": "Matthew Lane",
            "title": "Power-Up",
            "pages": 264.0,
            "extra": "ignored"
        });
        let book = NewBook::from_value(&value).unwrap();
        assert_eq!(book.isbn, "0691161518");
        assert_eq!(book.pages, Some(264));
        assert_eq!(book.amazon_url, None);
        assert_eq!(book.year, None);
    }

    #[test]
    fn test_new_book_rejects_bare_string() {
        let err = NewBook::from_value(&json!("I am a string, not a book object.")).unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                r#"instance requires property "isbn""#,
                r#"instance requires property "author""#,
                r#"instance requires property "title""#,
            ]
        );
    }

    #[test]
    fn test_new_book_params_in_table_order() {
        let book = NewBook::from_value(&json!({
            "isbn": "1", "author": "A", "title": "T", "year": 2023
        }))
        .unwrap();
        let params = book.into_params();
        assert_eq!(params.len(), 8);
        assert_eq!(params[0], SqlValue::Text("1".into()));
        assert_eq!(params[1], SqlValue::Null);
        assert_eq!(params[7], SqlValue::Integer(2023));
    }

    #[test]
    fn test_patch_ignores_isbn() {
        let patch = BookPatch::from_value(&json!({ "isbn": "other", "year": 2023 })).unwrap();
        assert_eq!(
            patch,
            BookPatch {
                year: Some(2023),
                ..Default::default()
            }
        );
        assert_eq!(patch.assignments(), vec![("year", SqlValue::Integer(2023))]);
    }

    #[test]
    fn test_patch_rejects_non_object() {
        let err = BookPatch::from_value(&json!("I am a string, not a book object.")).unwrap_err();
        assert_eq!(err.messages(), vec!["instance is not of a type(s) object"]);
    }

    #[test]
    fn test_empty_patch() {
        let patch = BookPatch::from_value(&json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_assignment_order() {
        let patch = BookPatch::from_value(&json!({
            "year": 1999, "title": "T", "pages": 10, "amazon_url": "http://a.co/x"
        }))
        .unwrap();
        let columns: Vec<_> = patch.assignments().into_iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["amazon_url", "pages", "title", "year"]);
    }

    #[test]
    fn test_book_serializes_nulls() {
        let book = Book {
            isbn: "1".into(),
            amazon_url: None,
            author: "A".into(),
            language: None,
            pages: None,
            publisher: None,
            title: "T".into(),
            year: Some(2017),
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["amazon_url"], Value::Null);
        assert_eq!(value["year"], 2017);
    }
}
