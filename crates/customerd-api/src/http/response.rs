//! JSON success responses.
//!
//! Bodies are encoded up front so an encoding failure can still be reported
//! as a 500 instead of a truncated response.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use customerd_types::error::CustomerError;

use crate::http::error::AppError;

/// A pre-encoded JSON response body with its status code.
#[derive(Debug)]
pub struct JsonResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl JsonResponse {
    /// Encode `value` as the body of a response with `status`.
    pub fn new<T: Serialize>(status: StatusCode, value: &T) -> Result<Self, AppError> {
        let body = serde_json::to_vec(value)
            .map_err(|e| AppError::from(CustomerError::Encoding(e.to_string())))?;
        Ok(Self { status, body })
    }

    pub fn ok<T: Serialize>(value: &T) -> Result<Self, AppError> {
        Self::new(StatusCode::OK, value)
    }

    pub fn created<T: Serialize>(value: &T) -> Result<Self, AppError> {
        Self::new(StatusCode::CREATED, value)
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        (self.status, [(CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}
