//! SQLite customer repository implementation.
//!
//! Implements `CustomerRepository` from `customerd-core` using sqlx with split read/write pools.

use customerd_core::repository::customer::CustomerRepository;
use customerd_types::customer::{Customer, CustomerId, NewCustomer};
use customerd_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `CustomerRepository`.
#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: DatabasePool,
}

impl SqliteCustomerRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Customer.
struct CustomerRow {
    id: i64,
    name: String,
    age: i64,
}

impl CustomerRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
        })
    }

    fn into_customer(self) -> Customer {
        Customer {
            id: CustomerId(self.id),
            name: self.name,
            age: self.age,
        }
    }
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Query(e.to_string())
}

impl CustomerRepository for SqliteCustomerRepository {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
        let result = sqlx::query("INSERT INTO customers (name, age) VALUES (?, ?)")
            .bind(&customer.name)
            .bind(customer.age)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(Customer {
            id: CustomerId(result.last_insert_rowid()),
            name: customer.name.clone(),
            age: customer.age,
        })
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, age FROM customers WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        match row {
            Some(row) => {
                let customer_row = CustomerRow::from_row(&row).map_err(query_error)?;
                Ok(Some(customer_row.into_customer()))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
        let result = sqlx::query("UPDATE customers SET name = ?, age = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(customer.age)
            .bind(customer.id.get())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(customer.clone())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected())
    }
}
