mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::pagination::PageOutOfRange;

pub type ApiResponse<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unprocessable(String),
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(description) => error_envelope(StatusCode::NOT_FOUND, &description),
            ApiError::Unprocessable(description) => {
                error_envelope(StatusCode::UNPROCESSABLE_ENTITY, &description)
            }
            // the quiz endpoint's historical shape, not the error envelope
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Database(sqlx::Error::RowNotFound) => {
                error_envelope(StatusCode::NOT_FOUND, "Object not found")
            }
            ApiError::Database(error) => {
                tracing::error!("database error: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
            }
        }
    }
}

fn error_envelope(status: StatusCode, description: &str) -> Response {
    (
        status,
        Json(json!({ "error": description, "status_code": status.as_u16() })),
    )
        .into_response()
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::Database(error)
    }
}

impl From<PageOutOfRange> for ApiError {
    fn from(_: PageOutOfRange) -> ApiError {
        ApiError::NotFound("page out of range".to_owned())
    }
}
