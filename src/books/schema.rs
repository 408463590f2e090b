//! Book payload schemas
//!
//! Properties are declared `isbn` first, then alphabetically. Violation
//! messages follow this order, and clients script against it.

use crate::schema::{FieldType, Schema};

pub const CREATE_SCHEMA_ID: &str = "book-create";
pub const UPDATE_SCHEMA_ID: &str = "book-update";

/// Schema for `POST /books`: `isbn`, `author` and `title` are required.
pub fn create_schema() -> Schema {
    Schema::new(CREATE_SCHEMA_ID)
        .required("isbn", FieldType::String)
        .optional("amazon_url", FieldType::String)
        .required("author", FieldType::String)
        .optional("language", FieldType::String)
        .optional("pages", FieldType::Integer)
        .optional("publisher", FieldType::String)
        .required("title", FieldType::String)
        .optional("year", FieldType::Integer)
}

/// Schema for `PUT /books/:isbn`: nothing required, but the payload
/// must be an object.
pub fn update_schema() -> Schema {
    create_schema()
        .with_root_type(FieldType::Object)
        .partial(UPDATE_SCHEMA_ID)
}
