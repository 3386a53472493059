//! Department service.

use tracing::info;

use crate::db::{Dao, DaoFactory, DepartmentDaoSql};
use crate::error::{AppError, Result};
use crate::models::Department;

/// Department operations used by the list and form controllers.
#[derive(Debug, Clone)]
pub struct DepartmentService<D = DepartmentDaoSql> {
    dao: D,
}

impl DepartmentService<DepartmentDaoSql> {
    /// Build a service on the factory's connection pool.
    pub fn from_factory(factory: &DaoFactory) -> Self {
        Self::new(factory.create_department_dao())
    }
}

impl<D: Dao<Department>> DepartmentService<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    /// Load every department ordered by name.
    pub async fn find_all(&self) -> Result<Vec<Department>> {
        self.dao.find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Department>> {
        self.dao.find_by_id(id).await
    }

    /// Insert when the department has no id, update otherwise.
    ///
    /// Returns the stored record; for inserts it carries the generated id.
    /// Updates are last-write-wins.
    pub async fn save_or_update(&self, dept: &Department) -> Result<Department> {
        if dept.name.trim().is_empty() {
            return Err(AppError::validation("Department name is required"));
        }

        match dept.id {
            None => {
                let saved = self.dao.insert(dept).await?;
                info!("Created department '{}' ({:?})", saved.name, saved.id);
                Ok(saved)
            }
            Some(id) => {
                self.dao.update(dept).await?;
                info!("Updated department {}", id);
                Ok(dept.clone())
            }
        }
    }

    /// Delete the department's row. No cascade to sellers.
    pub async fn remove(&self, dept: &Department) -> Result<()> {
        let id = dept
            .id
            .ok_or_else(|| AppError::precondition("Cannot remove a department that was never saved"))?;
        self.dao.delete_by_id(id).await?;
        info!("Removed department {}", id);
        Ok(())
    }
}
