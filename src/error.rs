use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while reading or stamping attendance.
///
/// Missing data on the scan path is reported as a denial, not as "not
/// found": callers cannot tell "no record yet" from "not allowed".
#[derive(Debug, Error)]
pub enum TimekeepingError {
    #[error("No timekeeping record found for today")]
    NoRecord,

    #[error("Employee not found")]
    NoEmployee,

    #[error("No schedule assigned to employee")]
    NoSchedule,

    #[error("QR code does not match")]
    QrMismatch,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ResponseError for TimekeepingError {
    fn status_code(&self) -> StatusCode {
        match self {
            TimekeepingError::NoRecord
            | TimekeepingError::NoEmployee
            | TimekeepingError::NoSchedule
            | TimekeepingError::QrMismatch => StatusCode::FORBIDDEN,
            TimekeepingError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            TimekeepingError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            TimekeepingError::Store(e) => {
                tracing::error!(error = %e, "Timekeeping store failure");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}
