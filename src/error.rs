//! Error handling for the application.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::notify::responses::QuoteAck;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    BadPayload(#[from] JsonRejection),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Email provider rejected the message ({status})")]
    DeliveryRejected { status: StatusCode, body: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadPayload(rejection) => {
                let status = rejection.status();
                (status, rejection.body_text())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::DeliveryFailed(msg) => {
                tracing::error!("Email delivery failed: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::DeliveryRejected { status, body } => {
                tracing::error!("Email provider rejected the message: {} {}", status, body);
                (status, body)
            }
        };

        (status, Json(QuoteAck::failed(detail))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
