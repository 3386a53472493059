//! Database connection pool and utility functions.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::entities::{department, prelude::*, seller};

/// Pool lifetime for in-memory SQLite, where recycling the connection would
/// drop every table.
const MEMORY_POOL_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Create a new database connection with configured pool settings.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(config)).await
}

/// Pool settings for a database config.
pub fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let url = config.connection_string();
    let in_memory = is_memory_url(&url);

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    if in_memory {
        opt.idle_timeout(MEMORY_POOL_LIFETIME).max_lifetime(MEMORY_POOL_LIFETIME);
    } else {
        opt.idle_timeout(Duration::from_secs(300));
    }

    opt
}

fn is_memory_url(url: &str) -> bool {
    url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Create the `department` and `seller` tables when they do not exist yet.
///
/// Tables are derived from the entity definitions. Existing tables are left
/// untouched; there is no migration of changed columns.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut departments = schema.create_table_from_entity(department::Entity);
    departments.if_not_exists();
    db.execute(backend.build(&departments)).await?;

    let mut sellers = schema.create_table_from_entity(seller::Entity);
    sellers.if_not_exists();
    db.execute(backend.build(&sellers)).await?;

    tracing::info!("Schema ready ({:?})", backend);
    Ok(())
}

/// Get record counts for all tables.
pub async fn get_table_counts(db: &DatabaseConnection) -> Result<TableCounts, DbErr> {
    let departments = Departments::find().count(db).await?;
    let sellers = Sellers::find().count(db).await?;

    Ok(TableCounts { departments, sellers })
}

/// Table record counts.
#[derive(Debug, Clone)]
pub struct TableCounts {
    pub departments: u64,
    pub sellers: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_pool_is_never_recycled() {
        let opt = connect_options(&DatabaseConfig::in_memory());
        assert_eq!(opt.get_idle_timeout(), Some(MEMORY_POOL_LIFETIME));
        assert_eq!(opt.get_max_lifetime(), Some(MEMORY_POOL_LIFETIME));
        assert_eq!(opt.get_max_connections(), Some(1));

        let config = DatabaseConfig {
            url: Some("sqlite:file:registry?mode=memory&cache=shared".to_string()),
            ..Default::default()
        };
        assert_eq!(connect_options(&config).get_max_lifetime(), Some(MEMORY_POOL_LIFETIME));
    }

    #[test]
    fn test_server_pool_recycles_idle_connections() {
        let opt = connect_options(&DatabaseConfig::default());
        assert_eq!(opt.get_idle_timeout(), Some(Duration::from_secs(300)));
        assert_eq!(opt.get_max_lifetime(), None);

        let config = DatabaseConfig {
            url: Some("sqlite://registry.db?mode=rwc".to_string()),
            ..Default::default()
        };
        assert_eq!(connect_options(&config).get_idle_timeout(), Some(Duration::from_secs(300)));
    }
}
