//! Schema validation for untyped request payloads
//!
//! A schema is a declarative, ordered set of property constraints. The
//! validator turns an arbitrary JSON value into either `Ok(())` or an
//! ordered list of violations whose messages are returned to clients
//! verbatim.
//!
//! # Design Principles
//!
//! - No coercion between types
//! - Collect every violation, never stop at the first
//! - Deterministic report order

mod errors;
mod types;
mod validator;

pub use errors::{SchemaResult, ValidationError, Violation};
pub use types::{as_integer, FieldDef, FieldType, Schema};
pub use validator::validate;
