use thiserror::Error;

use crate::customer::CustomerId;

/// Reasons a customer record fails the stored-record invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("age must be greater than zero, got {0}")]
    NonPositiveAge(i64),
}

/// Errors related to customer operations.
///
/// One variant per failure class a request can hit; the HTTP layer maps each
/// to exactly one status code.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("malformed request body: {0}")]
    MalformedInput(String),

    #[error("invalid customer data: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid customer id: '{0}'")]
    InvalidIdentifier(String),

    #[error("customer {0} not found")]
    NotFound(CustomerId),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Errors from repository operations (used by trait definitions in customerd-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}
