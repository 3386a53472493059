//! Seller service.

use tracing::info;

use crate::db::{DaoFactory, SellerDao, SellerDaoSql};
use crate::error::{AppError, Result};
use crate::models::Seller;

#[derive(Debug, Clone)]
pub struct SellerService<D = SellerDaoSql> {
    dao: D,
}

impl SellerService<SellerDaoSql> {
    pub fn from_factory(factory: &DaoFactory) -> Self {
        Self::new(factory.create_seller_dao())
    }
}

impl<D: SellerDao> SellerService<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    pub async fn find_all(&self) -> Result<Vec<Seller>> {
        self.dao.find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Seller>> {
        self.dao.find_by_id(id).await
    }

    pub async fn find_by_department(&self, department_id: i32) -> Result<Vec<Seller>> {
        self.dao.find_by_department(department_id).await
    }

    /// Insert when the seller has no id, update otherwise.
    pub async fn save_or_update(&self, seller: &Seller) -> Result<Seller> {
        if seller.name.trim().is_empty() {
            return Err(AppError::validation("Seller name is required"));
        }

        match seller.id {
            None => {
                let saved = self.dao.insert(seller).await?;
                info!("Created seller '{}' ({:?})", saved.name, saved.id);
                Ok(saved)
            }
            Some(id) => {
                self.dao.update(seller).await?;
                info!("Updated seller {}", id);
                Ok(seller.clone())
            }
        }
    }

    pub async fn remove(&self, seller: &Seller) -> Result<()> {
        let id = seller
            .id
            .ok_or_else(|| AppError::precondition("Cannot remove a seller that was never saved"))?;
        self.dao.delete_by_id(id).await?;
        info!("Removed seller {}", id);
        Ok(())
    }
}
