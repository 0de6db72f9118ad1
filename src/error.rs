/*
 * Responsibility
 * - App-wide AppError definition
 * - IntoResponse implementation (HTTP status / JSON error body)
 * - Uniform envelope: { "error": message, "details"?: string }
 * - RepoError / validation errors converge here
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    Query { message: String, details: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            // Query failures carry the collaborator's message so the caller
            // can present it; no retry is attempted.
            AppError::Query { message, details } => {
                (StatusCode::BAD_REQUEST, message, Some(details))
            }
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                format!("{resource} not found"),
                None,
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".into(), None),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "forbidden".into(), None),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".into(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Db(inner) => AppError::Query {
                message: "database query failed".into(),
                details: inner.to_string(),
            },
            RepoError::Corrupt(what) => AppError::Query {
                message: "stored row could not be interpreted".into(),
                details: what.to_string(),
            },
        }
    }
}
