use artmount_forms::MissingFields;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    MissingFields(#[from] MissingFields),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Failed to send confirmation email")]
    ConfirmationNotSent,

    #[error("Email error: {0}")]
    Email(String),

    #[error("Server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields(_) | AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            AppError::ConfirmationNotSent | AppError::Email(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(e) = &self {
            tracing::error!(error = ?e, "Unexpected error");
        }

        (
            self.status_code(),
            Json(json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}
