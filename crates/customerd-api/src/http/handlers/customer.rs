//! Customer CRUD handlers for the REST API.
//!
//! Bodies are taken as raw bytes rather than through the `Json` extractor so
//! that update can report a missing id before it looks at the body.

use axum::body::Bytes;
use axum::extract::{Path, State};

use customerd_types::customer::CustomerId;
use customerd_types::error::CustomerError;

use crate::http::error::AppError;
use crate::http::response::JsonResponse;
use crate::state::AppState;

/// Parse the `{id}` route parameter.
fn parse_id(raw: &str) -> Result<CustomerId, AppError> {
    raw.parse()
        .map_err(|_| CustomerError::InvalidIdentifier(raw.to_string()).into())
}

/// POST /customers - Create a new customer.
pub async fn create_customer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<JsonResponse, AppError> {
    let customer = state.customer_service.create_customer(&body).await?;
    JsonResponse::created(&customer)
}

/// GET /customers/{id} - Get a customer by id.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<JsonResponse, AppError> {
    let id = parse_id(&raw_id)?;
    let customer = state.customer_service.get_customer(id).await?;
    JsonResponse::ok(&customer)
}

/// PUT /customers/{id} - Update a customer.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<JsonResponse, AppError> {
    let id = parse_id(&raw_id)?;
    let customer = state.customer_service.update_customer(id, &body).await?;
    JsonResponse::ok(&customer)
}

/// DELETE /customers/{id} - Delete a customer permanently.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<JsonResponse, AppError> {
    let id = parse_id(&raw_id)?;
    state.customer_service.delete_customer(id).await?;
    JsonResponse::ok(&format!("Customer with id {id} deleted"))
}
