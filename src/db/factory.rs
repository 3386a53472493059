//! Construction point for DAOs sharing one connection pool.

use sea_orm::DatabaseConnection;
use tracing::debug;

use super::connection;
use super::department::DepartmentDaoSql;
use super::seller::SellerDaoSql;
use crate::config::DatabaseConfig;
use crate::error::Result;

/// Hands out DAOs backed by the same pooled connection.
///
/// The pool is owned by the factory and cloned into each DAO, so a dropped
/// connection is replaced by the pool instead of poisoning the process.
#[derive(Debug, Clone)]
pub struct DaoFactory {
    db: DatabaseConnection,
}

impl DaoFactory {
    /// Wrap an already opened connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Open a pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        debug!("Creating DAO factory from database configuration");
        let db = connection::connect(config).await?;
        Ok(Self::new(db))
    }

    /// The shared connection pool.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn create_department_dao(&self) -> DepartmentDaoSql {
        DepartmentDaoSql::new(self.db.clone())
    }

    pub fn create_seller_dao(&self) -> SellerDaoSql {
        SellerDaoSql::new(self.db.clone())
    }
}
