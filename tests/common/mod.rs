//! Shared setup for integration tests.

use dept_registry::config::DatabaseConfig;
use dept_registry::db::{self, DaoFactory};

/// Helper: fresh in-memory database with both tables created.
pub async fn setup() -> DaoFactory {
    let factory = DaoFactory::connect(&DatabaseConfig::in_memory()).await.unwrap();
    db::ensure_schema(factory.connection()).await.unwrap();
    factory
}
