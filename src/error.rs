//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid database url '{url}': {source}")]
    InvalidDatabaseUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("cannot open database '{url}': {source}")]
    Open {
        url: String,
        #[source]
        source: sqlx::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("validation: {0}")]
    Validation(String),
    /// A constraint enforced by the store itself (dangling foreign key, CHECK, NOT NULL).
    #[error("integrity: {0}")]
    Integrity(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db)
                if db.is_foreign_key_violation()
                    || db.is_check_violation()
                    || db.is_unique_violation()
                    || matches!(db.kind(), sqlx::error::ErrorKind::NotNullViolation) =>
            {
                AppError::Integrity(db.message().to_string())
            }
            _ => AppError::Db(e),
        }
    }
}

/// Body for 404 and malformed-request responses.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for rejected writes. Field-level detail is never returned.
#[derive(Serialize)]
pub struct ValidationBody {
    pub errors: Vec<&'static str>,
}

pub const VALIDATION_MESSAGE: &str = "validation errors";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: message.to_string(),
                }),
            )
                .into_response(),
            AppError::Validation(detail) | AppError::Integrity(detail) => {
                tracing::debug!(%detail, "rejected write");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationBody {
                        errors: vec![VALIDATION_MESSAGE],
                    }),
                )
                    .into_response()
            }
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
