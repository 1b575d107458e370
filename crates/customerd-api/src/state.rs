//! Application state wiring the service to its storage.
//!
//! The customer service is generic over the repository trait; AppState pins
//! it to the SQLite implementation and hands it to every handler through
//! axum's `State` extractor.

use std::sync::Arc;

use customerd_core::service::customer::CustomerService;
use customerd_infra::sqlite::customer::SqliteCustomerRepository;
use customerd_infra::sqlite::pool::DatabasePool;
use customerd_types::config::ServiceConfig;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteCustomerService = CustomerService<SqliteCustomerRepository>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<ConcreteCustomerService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Connect to the configured database (running migrations) and wire the service.
    pub async fn init(config: &ServiceConfig) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(&config.database_url).await?;
        Ok(Self::from_pool(db_pool))
    }

    pub fn from_pool(db_pool: DatabasePool) -> Self {
        let repo = SqliteCustomerRepository::new(db_pool.clone());
        Self {
            customer_service: Arc::new(CustomerService::new(repo)),
            db_pool,
        }
    }
}
