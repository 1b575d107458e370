//! Customer repository trait definition.

use customerd_types::customer::{Customer, CustomerId, NewCustomer};
use customerd_types::error::RepositoryError;

/// Repository trait for customer persistence.
///
/// Implementations live in customerd-infra (e.g., SqliteCustomerRepository).
/// The repository stores whatever it is given; the record invariant is the
/// service's job.
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer and return it with its assigned id.
    fn create(
        &self,
        customer: &NewCustomer,
    ) -> impl std::future::Future<Output = Result<Customer, RepositoryError>> + Send;

    /// Get a customer by id. `Ok(None)` when no such row exists.
    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl std::future::Future<Output = Result<Option<Customer>, RepositoryError>> + Send;

    /// Replace every column of an existing customer.
    ///
    /// Returns `RepositoryError::NotFound` if the row no longer exists.
    fn save(
        &self,
        customer: &Customer,
    ) -> impl std::future::Future<Output = Result<Customer, RepositoryError>> + Send;

    /// Delete a customer by id and return the number of rows affected.
    fn delete_by_id(
        &self,
        id: CustomerId,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
