//! Customer management service.
//!
//! Owns the four request flows (create, read, update, delete): decoding the
//! request body, enforcing the record invariant before every write, and
//! translating repository outcomes into [`CustomerError`].

use customerd_types::customer::{Customer, CustomerId, CustomerPayload};
use customerd_types::error::{CustomerError, RepositoryError};

use crate::repository::customer::CustomerRepository;

/// Decode a request body into a [`CustomerPayload`].
///
/// Anything that is not a single JSON object with the expected field types
/// is `MalformedInput`, carrying the decoder's message.
pub fn decode_payload(body: &[u8]) -> Result<CustomerPayload, CustomerError> {
    serde_json::from_slice(body).map_err(|e| CustomerError::MalformedInput(e.to_string()))
}

fn storage_error(err: RepositoryError) -> CustomerError {
    tracing::error!(error = %err, "customer storage failure");
    CustomerError::Storage(err.to_string())
}

/// Service orchestrating the customer lifecycle.
///
/// Generic over the repository trait so customerd-core never depends on
/// customerd-infra.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a customer from a raw request body.
    ///
    /// Omitted fields default to `""` / `0` and an `id` in the body is
    /// ignored; the store assigns the id.
    pub async fn create_customer(&self, body: &[u8]) -> Result<Customer, CustomerError> {
        let new = decode_payload(body)?.into_new_customer();
        new.validate()?;

        let customer = self.repo.create(&new).await.map_err(storage_error)?;
        tracing::info!(id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Get a customer by id.
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(CustomerError::NotFound(id))
    }

    /// Update a customer from a raw request body.
    ///
    /// The record is loaded before the body is looked at, so a missing id
    /// wins over a malformed body. Fields present in the body overwrite the
    /// stored values; omitted fields are kept.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        body: &[u8],
    ) -> Result<Customer, CustomerError> {
        let mut customer = self.get_customer(id).await?;

        decode_payload(body)?.merge_into(&mut customer);
        customer.validate()?;

        let customer = self.repo.save(&customer).await.map_err(|e| match e {
            RepositoryError::NotFound => CustomerError::NotFound(id),
            other => storage_error(other),
        })?;
        tracing::info!(id = %customer.id, "customer updated");
        Ok(customer)
    }

    /// Delete a customer by id. Zero affected rows means it did not exist.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomerError> {
        let affected = self.repo.delete_by_id(id).await.map_err(storage_error)?;
        if affected == 0 {
            return Err(CustomerError::NotFound(id));
        }

        tracing::info!(id = %id, "customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use customerd_types::customer::NewCustomer;
    use customerd_types::error::ValidationError;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory repository with SQLite AUTOINCREMENT id semantics.
    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<BTreeMap<i64, Customer>>,
        last_id: Mutex<i64>,
    }

    impl MemoryRepository {
        fn seeded() -> Self {
            let repo = Self::default();
            for (name, age) in [("John Doe", 30), ("Jane Doe", 25)] {
                repo.insert(NewCustomer {
                    name: name.to_string(),
                    age,
                });
            }
            repo
        }

        fn insert(&self, new: NewCustomer) -> Customer {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let customer = Customer {
                id: CustomerId(*last_id),
                name: new.name,
                age: new.age,
            };
            self.rows
                .lock()
                .unwrap()
                .insert(*last_id, customer.clone());
            customer
        }
    }

    impl CustomerRepository for MemoryRepository {
        async fn create(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
            Ok(self.insert(customer.clone()))
        }

        async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
            Ok(self.rows.lock().unwrap().get(&id.get()).cloned())
        }

        async fn save(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&customer.id.get()) {
                Some(row) => {
                    *row = customer.clone();
                    Ok(customer.clone())
                }
                None => Err(RepositoryError::NotFound),
            }
        }

        async fn delete_by_id(&self, id: CustomerId) -> Result<u64, RepositoryError> {
            Ok(self.rows.lock().unwrap().remove(&id.get()).map_or(0, |_| 1))
        }
    }

    /// Repository whose every call fails like a broken database.
    struct BrokenRepository;

    impl CustomerRepository for BrokenRepository {
        async fn create(&self, _: &NewCustomer) -> Result<Customer, RepositoryError> {
            Err(RepositoryError::Query("database is locked".to_string()))
        }

        async fn get_by_id(&self, _: CustomerId) -> Result<Option<Customer>, RepositoryError> {
            Err(RepositoryError::Query("database is locked".to_string()))
        }

        async fn save(&self, _: &Customer) -> Result<Customer, RepositoryError> {
            Err(RepositoryError::Query("database is locked".to_string()))
        }

        async fn delete_by_id(&self, _: CustomerId) -> Result<u64, RepositoryError> {
            Err(RepositoryError::Query("database is locked".to_string()))
        }
    }

    fn service() -> CustomerService<MemoryRepository> {
        CustomerService::new(MemoryRepository::seeded())
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let svc = service();
        let created = svc
            .create_customer(br#"{"name":"Alice","age":28}"#)
            .await
            .unwrap();
        assert_eq!(created.id, CustomerId(3));
        assert_eq!(created.name, "Alice");
        assert_eq!(created.age, 28);
    }

    #[tokio::test]
    async fn test_create_ignores_body_id() {
        let svc = service();
        let created = svc
            .create_customer(br#"{"id":1,"name":"Alice","age":28}"#)
            .await
            .unwrap();
        assert_eq!(created.id, CustomerId(3));
        assert_eq!(svc.get_customer(CustomerId(1)).await.unwrap().name, "John Doe");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_data() {
        let svc = service();

        let err = svc.create_customer(br#"{"name":"","age":30}"#).await.unwrap_err();
        assert!(matches!(err, CustomerError::Validation(ValidationError::EmptyName)));

        let err = svc.create_customer(br#"{"name":"Alice"}"#).await.unwrap_err();
        assert!(matches!(
            err,
            CustomerError::Validation(ValidationError::NonPositiveAge(0))
        ));

        let err = svc.create_customer(br#"{"age":28}"#).await.unwrap_err();
        assert!(matches!(err, CustomerError::Validation(ValidationError::EmptyName)));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let svc = service();
        let bodies: [&[u8]; 4] = [b"", b"{", b"not json", br#"{"age":"old"}"#];
        for body in bodies {
            let err = svc.create_customer(body).await.unwrap_err();
            assert!(matches!(err, CustomerError::MalformedInput(_)), "{body:?}");
        }
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let svc = service();
        let err = svc.get_customer(CustomerId(999)).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound(CustomerId(999))));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let svc = service();
        let updated = svc
            .update_customer(CustomerId(1), br#"{"id":1,"name":"John Smith","age":35}"#)
            .await
            .unwrap();
        assert_eq!(updated.name, "John Smith");
        assert_eq!(updated.age, 35);

        let found = svc.get_customer(CustomerId(1)).await.unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let svc = service();
        let updated = svc
            .update_customer(CustomerId(2), br#"{"age":26}"#)
            .await
            .unwrap();
        assert_eq!(updated.name, "Jane Doe");
        assert_eq!(updated.age, 26);
    }

    #[tokio::test]
    async fn test_update_body_id_does_not_move_record() {
        let svc = service();
        let updated = svc
            .update_customer(CustomerId(2), br#"{"id":1,"name":"Janet"}"#)
            .await
            .unwrap();
        assert_eq!(updated.id, CustomerId(2));
        assert_eq!(svc.get_customer(CustomerId(1)).await.unwrap().name, "John Doe");
    }

    #[tokio::test]
    async fn test_update_missing_id_wins_over_bad_body() {
        let svc = service();
        let err = svc.update_customer(CustomerId(999), b"").await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_data_without_writing() {
        let svc = service();
        let err = svc
            .update_customer(CustomerId(1), br#"{"name":"","age":-1}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::Validation(_)));

        let found = svc.get_customer(CustomerId(1)).await.unwrap();
        assert_eq!(found.name, "John Doe");
        assert_eq!(found.age, 30);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let svc = service();
        svc.delete_customer(CustomerId(1)).await.unwrap();
        let err = svc.get_customer(CustomerId(1)).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let svc = service();
        let err = svc.delete_customer(CustomerId(999)).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound(CustomerId(999))));
    }

    #[tokio::test]
    async fn test_storage_failures_surface_as_storage_errors() {
        let svc = CustomerService::new(BrokenRepository);

        let err = svc
            .create_customer(br#"{"name":"Alice","age":28}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::Storage(_)));

        let err = svc.get_customer(CustomerId(1)).await.unwrap_err();
        assert!(matches!(err, CustomerError::Storage(_)));

        let err = svc.delete_customer(CustomerId(1)).await.unwrap_err();
        assert!(matches!(err, CustomerError::Storage(_)));
    }
}
