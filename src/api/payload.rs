//! Request body parsing and required-field validation.
//!
//! The CRUD contract fixes both the error messages and the order in which
//! checks run, so handlers work on the raw body: parse to a JSON object
//! ("Not a JSON"), check required keys one at a time ("Missing <field>"),
//! then hand the object to serde for typed decoding.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// Parse a raw request body into a JSON object.
///
/// # Errors
///
/// Returns [`AppError::NotJson`] when the body is empty, not valid JSON, or
/// valid JSON that is not an object.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) | Err(_) => Err(AppError::NotJson),
    }
}

/// Check that `field` is present in the body, whatever its value.
///
/// # Errors
///
/// Returns [`AppError::MissingField`] when the key is absent.
pub fn require(map: &Map<String, Value>, field: &'static str) -> Result<()> {
    if map.contains_key(field) {
        Ok(())
    } else {
        Err(AppError::MissingField(field))
    }
}

/// Read a present `field` as a typed id.
///
/// # Errors
///
/// Returns [`AppError::NotFound`]: a value that is not a well-formed UUID
/// string cannot name any entity, exactly like a lookup of an absent id.
pub fn id_field<T: FromStr>(map: &Map<String, Value>, field: &str) -> Result<T> {
    map.get(field)
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse().ok())
        .ok_or(AppError::NotFound)
}

/// Parse a path segment as a typed id.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] for ill-formed ids, same as [`id_field`].
pub fn path_id<T: FromStr>(raw: &str) -> Result<T> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// Decode the validated object into a typed payload.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] with the decode message when a value has
/// the wrong type for its field.
pub fn decode<T: serde::de::DeserializeOwned>(map: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(map)).map_err(|e| AppError::BadRequest(e.to_string()))
}
