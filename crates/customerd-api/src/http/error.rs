//! Application error type mapping to HTTP status codes and plain-text bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use customerd_types::error::CustomerError;

/// Application-level error that maps to HTTP responses.
///
/// Every failure ends the request with exactly one `text/plain` response.
#[derive(Debug)]
pub enum AppError {
    /// Customer-related errors.
    Customer(CustomerError),
}

impl From<CustomerError> for AppError {
    fn from(e: CustomerError) -> Self {
        AppError::Customer(e)
    }
}

impl AppError {
    /// Status code and body text for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Customer(CustomerError::MalformedInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Customer(CustomerError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid customer data".to_string())
            }
            AppError::Customer(CustomerError::InvalidIdentifier(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid ID".to_string())
            }
            AppError::Customer(CustomerError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Not found customer with id {id}"))
            }
            AppError::Customer(CustomerError::Storage(msg))
            | AppError::Customer(CustomerError::Encoding(msg)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let AppError::Customer(err) = &self;
        if status.is_server_error() {
            tracing::error!(%status, error = %err, "request failed");
        } else {
            tracing::debug!(%status, error = %err, "request rejected");
        }

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
