//! Seller DAO backed by SeaORM.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

use super::dao::Dao;
use crate::entities::{prelude::*, seller};
use crate::error::{AppError, Result};
use crate::models::Seller;

/// Seller-specific lookups on top of the common contract.
pub trait SellerDao: Dao<Seller> {
    /// Sellers of one department ordered by name; empty when there are none.
    fn find_by_department(&self, department_id: i32) -> impl Future<Output = Result<Vec<Seller>>> + Send;
}

/// Seller DAO sharing the factory's connection pool.
#[derive(Debug, Clone)]
pub struct SellerDaoSql {
    db: DatabaseConnection,
}

impl SellerDaoSql {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Column values for every non-key field.
fn active_fields(s: &Seller) -> seller::ActiveModel {
    seller::ActiveModel {
        name: Set(s.name.clone()),
        email: Set(s.email.clone()),
        birth_date: Set(s.birth_date),
        base_salary: Set(s.base_salary),
        department_id: Set(s.department_id),
        ..Default::default()
    }
}

impl Dao<Seller> for SellerDaoSql {
    async fn insert(&self, s: &Seller) -> Result<Seller> {
        if s.id.is_some() {
            return Err(AppError::precondition("Cannot insert a seller that already has an id"));
        }

        let inserted = active_fields(s).insert(&self.db).await?;
        debug!(id = inserted.id, "Inserted seller");
        Ok(inserted.into())
    }

    async fn update(&self, s: &Seller) -> Result<()> {
        let Some(id) = s.id else {
            return Err(AppError::precondition("Cannot update a seller without an id"));
        };

        let result = Sellers::update_many()
            .set(active_fields(s))
            .filter(seller::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        debug!(id, rows_affected = result.rows_affected, "Updated seller");
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        let result = Sellers::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows_affected = result.rows_affected, "Deleted seller");
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Seller>> {
        let found = Sellers::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Seller::from))
    }

    async fn find_all(&self) -> Result<Vec<Seller>> {
        let rows = Sellers::find()
            .order_by_asc(seller::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Seller::from).collect())
    }
}

impl SellerDao for SellerDaoSql {
    async fn find_by_department(&self, department_id: i32) -> Result<Vec<Seller>> {
        let rows = Sellers::find()
            .filter(seller::Column::DepartmentId.eq(department_id))
            .order_by_asc(seller::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Seller::from).collect())
    }
}
