//! Request body extraction
//!
//! Bodies are taken as-is and decoded leniently so that every payload,
//! well-formed or not, reaches the schema validator. Nothing is rejected
//! here for its content type or its shape.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use super::errors::ApiError;

/// Untyped request body, not yet validated
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for UnknownBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;
        Ok(Self(decode_body(&bytes)))
    }
}

/// Decodes a raw body.
///
/// - empty body: empty object
/// - valid JSON: that value
/// - anything else: the body text as a JSON string
pub fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
