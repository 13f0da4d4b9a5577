//! HTTP handlers for campers, activities and signups.

pub mod activities;
pub mod campers;
pub mod signups;

use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Ids are integers; anything else in the `{id}` segment is a malformed request.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// Turn a JSON body into a typed payload. Syntax problems are a bad request; a well-formed
/// object whose values have the wrong types is a validation failure.
pub(crate) fn parse_body<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
}
