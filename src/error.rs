use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Everything a handler can fail with, mapped onto the HTTP surface in one
/// place. Handlers bubble errors up with `?`; the `From` impls below cover
/// the library error types they run into.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input data")]
    Validation(#[from] ValidationErrors),
    /// Unknown email and wrong password collapse into this one variant so
    /// the response never reveals which part was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        AppError::Unauthorized("Invalid or expired session".into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": "Invalid input data",
                    "errors": field_messages(&errors),
                }),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Invalid credentials" }),
            ),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, json!({ "message": msg }))
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "message": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            AppError::Database(e) => {
                if e.as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false)
                {
                    (
                        StatusCode::CONFLICT,
                        json!({ "message": "Duplicate record" }),
                    )
                } else {
                    tracing::error!(error = %e, "database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "message": "Internal server error" }),
                    )
                }
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Flatten `ValidationErrors` into `[{field, message}]`, with field names in
/// the camelCase form the wire format uses.
fn field_messages(errors: &ValidationErrors) -> Vec<serde_json::Value> {
    let mut out = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            out.push(json!({
                "field": camel_case(field),
                "message": err
                    .message
                    .as_deref()
                    .unwrap_or_else(|| err.code.as_ref()),
            }));
        }
    }
    out
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
