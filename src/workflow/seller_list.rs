//! Seller list controller.

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

use super::{ChangeListener, DataChanged, ListCommand, ListOutcome, SERVICE_NOT_SET, SellerForm};
use crate::db::{Dao, DepartmentDaoSql, SellerDao, SellerDaoSql};
use crate::error::{AppError, Result};
use crate::models::{Department, Seller};
use crate::services::{DepartmentService, SellerService};

/// Rows of the seller table, optionally restricted to one department.
pub struct SellerList<D = SellerDaoSql, DD = DepartmentDaoSql> {
    service: Option<SellerService<D>>,
    department_service: Option<DepartmentService<DD>>,
    department_filter: Option<i32>,
    rows: Vec<Seller>,
    changes_tx: ChangeListener,
    changes_rx: UnboundedReceiver<DataChanged>,
}

impl<D, DD> Default for SellerList<D, DD> {
    fn default() -> Self {
        let (changes_tx, changes_rx) = mpsc::unbounded_channel();
        Self {
            service: None,
            department_service: None,
            department_filter: None,
            rows: Vec::new(),
            changes_tx,
            changes_rx,
        }
    }
}

impl<D, DD> SellerList<D, DD>
where
    D: SellerDao + Clone,
    DD: Dao<Department> + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_services(&mut self, service: SellerService<D>, department_service: DepartmentService<DD>) {
        self.service = Some(service);
        self.department_service = Some(department_service);
    }

    pub fn rows(&self) -> &[Seller] {
        &self.rows
    }

    pub fn department_filter(&self) -> Option<i32> {
        self.department_filter
    }

    /// Restrict the rows to one department (or lift the restriction) and reload.
    pub async fn set_department_filter(&mut self, department_id: Option<i32>) -> Result<()> {
        self.department_filter = department_id;
        self.refresh().await
    }

    /// Lift the department filter if it points at a deleted department.
    ///
    /// Returns whether the filter was cleared.
    pub async fn department_removed(&mut self, department_id: i32) -> Result<bool> {
        if self.department_filter != Some(department_id) {
            return Ok(false);
        }
        self.set_department_filter(None).await?;
        Ok(true)
    }

    pub fn subscriber(&self) -> ChangeListener {
        self.changes_tx.clone()
    }

    fn service(&self) -> Result<&SellerService<D>> {
        self.service.as_ref().ok_or_else(|| AppError::precondition(SERVICE_NOT_SET))
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let service = self.service()?;
        let rows = match self.department_filter {
            Some(department_id) => service.find_by_department(department_id).await?,
            None => service.find_all().await?,
        };
        info!("Loaded {} sellers", rows.len());
        self.rows = rows;
        Ok(())
    }

    pub async fn poll_changes(&mut self) -> Result<bool> {
        let mut changed = false;
        while self.changes_rx.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.refresh().await?;
        }
        Ok(changed)
    }

    /// Form for a seller with its department options loaded.
    pub async fn open_form(&self, seller: Seller) -> Result<SellerForm<D, DD>> {
        let department_service = self
            .department_service
            .clone()
            .ok_or_else(|| AppError::precondition("Department service was not set"))?;

        let mut form = SellerForm::new();
        form.set_entity(seller);
        form.set_services(self.service()?.clone(), department_service);
        form.subscribe(self.subscriber());
        form.update_form_data()?;
        form.load_associated_objects().await?;
        Ok(form)
    }

    pub async fn remove(&mut self, seller: &Seller) -> Result<()> {
        self.service()?.remove(seller).await?;
        self.refresh().await
    }

    pub async fn handle(&mut self, command: ListCommand<Seller>) -> Result<ListOutcome<SellerForm<D, DD>>> {
        match command {
            ListCommand::New => {
                let seller = Seller {
                    department_id: self.department_filter,
                    ..Seller::default()
                };
                Ok(ListOutcome::OpenForm(self.open_form(seller).await?))
            }
            ListCommand::Edit(seller) => Ok(ListOutcome::OpenForm(self.open_form(seller).await?)),
            ListCommand::Delete(seller) => {
                self.remove(&seller).await?;
                Ok(ListOutcome::Refreshed)
            }
        }
    }
}
