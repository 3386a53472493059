//! Department DAO backed by SeaORM.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

use super::dao::Dao;
use crate::entities::{department, prelude::*};
use crate::error::{AppError, Result};
use crate::models::Department;

/// Department DAO sharing the factory's connection pool.
#[derive(Debug, Clone)]
pub struct DepartmentDaoSql {
    db: DatabaseConnection,
}

impl DepartmentDaoSql {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Dao<Department> for DepartmentDaoSql {
    async fn insert(&self, dept: &Department) -> Result<Department> {
        if dept.id.is_some() {
            return Err(AppError::precondition("Cannot insert a department that already has an id"));
        }

        let model = department::ActiveModel {
            name: Set(dept.name.clone()),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await?;
        debug!(id = inserted.id, "Inserted department");
        Ok(inserted.into())
    }

    async fn update(&self, dept: &Department) -> Result<()> {
        let Some(id) = dept.id else {
            return Err(AppError::precondition("Cannot update a department without an id"));
        };

        let result = Departments::update_many()
            .set(department::ActiveModel {
                name: Set(dept.name.clone()),
                ..Default::default()
            })
            .filter(department::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        debug!(id, rows_affected = result.rows_affected, "Updated department");
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        let result = Departments::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows_affected = result.rows_affected, "Deleted department");
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>> {
        let found = Departments::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Department::from))
    }

    async fn find_all(&self) -> Result<Vec<Department>> {
        let rows = Departments::find()
            .order_by_asc(department::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }
}
