//! Department list controller.

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

use super::{ChangeListener, DataChanged, DepartmentForm, ListCommand, ListOutcome, SERVICE_NOT_SET};
use crate::db::{Dao, DepartmentDaoSql};
use crate::error::{AppError, Result};
use crate::models::Department;
use crate::services::DepartmentService;

/// Rows of the department table plus the actions available on them.
pub struct DepartmentList<D = DepartmentDaoSql> {
    service: Option<DepartmentService<D>>,
    rows: Vec<Department>,
    changes_tx: ChangeListener,
    changes_rx: UnboundedReceiver<DataChanged>,
}

impl<D> Default for DepartmentList<D> {
    fn default() -> Self {
        let (changes_tx, changes_rx) = mpsc::unbounded_channel();
        Self {
            service: None,
            rows: Vec::new(),
            changes_tx,
            changes_rx,
        }
    }
}

impl<D: Dao<Department> + Clone> DepartmentList<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_service(&mut self, service: DepartmentService<D>) {
        self.service = Some(service);
    }

    pub fn rows(&self) -> &[Department] {
        &self.rows
    }

    /// A sender that makes this list reload on its next [`poll_changes`].
    ///
    /// [`poll_changes`]: DepartmentList::poll_changes
    pub fn subscriber(&self) -> ChangeListener {
        self.changes_tx.clone()
    }

    fn service(&self) -> Result<&DepartmentService<D>> {
        self.service.as_ref().ok_or_else(|| AppError::precondition(SERVICE_NOT_SET))
    }

    /// Reload all rows from the service.
    pub async fn refresh(&mut self) -> Result<()> {
        let rows = self.service()?.find_all().await?;
        info!("Loaded {} departments", rows.len());
        self.rows = rows;
        Ok(())
    }

    /// Drain pending change notifications and reload once if there were any.
    ///
    /// Returns whether a reload happened.
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

    /// Form for a department, wired to this list's service and change channel.
    pub fn open_form(&self, dept: Department) -> Result<DepartmentForm<D>> {
        let mut form = DepartmentForm::new();
        form.set_entity(dept);
        form.set_service(self.service()?.clone());
        form.subscribe(self.subscriber());
        form.update_form_data()?;
        Ok(form)
    }

    /// Delete a row and reload.
    pub async fn remove(&mut self, dept: &Department) -> Result<()> {
        self.service()?.remove(dept).await?;
        self.refresh().await
    }

    pub async fn handle(&mut self, command: ListCommand<Department>) -> Result<ListOutcome<DepartmentForm<D>>> {
        match command {
            ListCommand::New => Ok(ListOutcome::OpenForm(self.open_form(Department::default())?)),
            ListCommand::Edit(dept) => Ok(ListOutcome::OpenForm(self.open_form(dept)?)),
            ListCommand::Delete(dept) => {
                self.remove(&dept).await?;
                Ok(ListOutcome::Refreshed)
            }
        }
    }
}
