//! Department form controller.

use tracing::warn;

use super::{ChangeListener, DataChanged, ENTITY_NOT_SET, FormCommand, FormOutcome, SERVICE_NOT_SET, constraints};
use crate::db::{Dao, DepartmentDaoSql};
use crate::error::{AppError, Result};
use crate::models::Department;
use crate::services::DepartmentService;

/// Longest department name the form accepts.
pub const NAME_MAX_LEN: usize = 30;

/// State of the department edit window.
///
/// The entity and service must be set before [`update_form_data`] or
/// [`save`] are called; missing collaborators are precondition errors.
///
/// [`update_form_data`]: DepartmentForm::update_form_data
/// [`save`]: DepartmentForm::save
pub struct DepartmentForm<D = DepartmentDaoSql> {
    entity: Option<Department>,
    service: Option<DepartmentService<D>>,
    listeners: Vec<ChangeListener>,
    id: String,
    name: String,
    error: Option<String>,
}

impl<D> Default for DepartmentForm<D> {
    fn default() -> Self {
        Self {
            entity: None,
            service: None,
            listeners: Vec::new(),
            id: String::new(),
            name: String::new(),
            error: None,
        }
    }
}

impl<D: Dao<Department>> DepartmentForm<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entity(&mut self, entity: Department) {
        self.entity = Some(entity);
    }

    pub fn set_service(&mut self, service: DepartmentService<D>) {
        self.service = Some(service);
    }

    /// Register a channel notified after every successful save.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Copy the entity's fields into the text fields.
    pub fn update_form_data(&mut self) -> Result<()> {
        let entity = self
            .entity
            .as_ref()
            .ok_or_else(|| AppError::precondition(ENTITY_NOT_SET))?;

        self.id = entity.id.map(|id| id.to_string()).unwrap_or_default();
        self.name = entity.name.clone();
        self.error = None;
        Ok(())
    }

    /// Whether the form edits an already stored department.
    pub fn is_editing(&self) -> bool {
        self.entity.as_ref().is_some_and(|e| e.id.is_some())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inline error label text.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply an edit to the id field; only digits are accepted.
    pub fn input_id(&mut self, text: &str) {
        self.id = constraints::integer(&self.id, text).to_string();
    }

    /// Apply an edit to the name field; edits past the length limit are rejected.
    pub fn input_name(&mut self, text: &str) {
        self.name = constraints::max_length(&self.name, text, NAME_MAX_LEN).to_string();
    }

    pub async fn handle(&mut self, command: FormCommand) -> Result<FormOutcome<Department>> {
        match command {
            FormCommand::Save => self.save().await,
            FormCommand::Cancel => Ok(self.cancel()),
        }
    }

    /// Store the form's fields.
    ///
    /// Field problems and database failures keep the form open with an
    /// inline message. Only precondition errors are returned as `Err`.
    pub async fn save(&mut self) -> Result<FormOutcome<Department>> {
        if self.entity.is_none() {
            return Err(AppError::precondition(ENTITY_NOT_SET));
        }
        if self.service.is_none() {
            return Err(AppError::precondition(SERVICE_NOT_SET));
        }
        if self.name.trim().is_empty() {
            self.error = Some("Field can't be empty".to_string());
            return Ok(FormOutcome::Open);
        }

        let dept = self.form_data();
        let service = self
            .service
            .as_ref()
            .ok_or_else(|| AppError::precondition(SERVICE_NOT_SET))?;
        let result = service.save_or_update(&dept).await;

        match result {
            Ok(saved) => {
                self.entity = Some(saved.clone());
                self.error = None;
                self.notify_listeners();
                Ok(FormOutcome::Saved(saved))
            }
            Err(e @ (AppError::Database(_) | AppError::Validation(_))) => {
                warn!("Error saving department: {}", e);
                self.error = Some(e.to_string());
                Ok(FormOutcome::Open)
            }
            Err(e) => Err(e),
        }
    }

    /// Close without touching the database.
    pub fn cancel(&mut self) -> FormOutcome<Department> {
        FormOutcome::Cancelled
    }

    /// Build a fresh department from the text fields.
    fn form_data(&self) -> Department {
        Department {
            id: self.id.trim().parse().ok(),
            name: self.name.clone(),
        }
    }

    fn notify_listeners(&mut self) {
        self.listeners.retain(|listener| listener.send(DataChanged).is_ok());
    }
}
