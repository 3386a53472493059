//! Seller form controller.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use super::{ChangeListener, DataChanged, ENTITY_NOT_SET, FormCommand, FormOutcome, SERVICE_NOT_SET, constraints};
use crate::db::{Dao, DepartmentDaoSql, SellerDao, SellerDaoSql};
use crate::error::{AppError, Result};
use crate::models::{Department, Seller};
use crate::services::{DepartmentService, SellerService};

pub const NAME_MAX_LEN: usize = 70;
pub const EMAIL_MAX_LEN: usize = 60;

/// Field keys used in [`SellerForm::field_error`].
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const BIRTH_DATE: &str = "birth_date";
    pub const BASE_SALARY: &str = "base_salary";
}

const REQUIRED: &str = "Field can't be empty";

/// State of the seller edit window.
pub struct SellerForm<D = SellerDaoSql, DD = DepartmentDaoSql> {
    entity: Option<Seller>,
    service: Option<SellerService<D>>,
    department_service: Option<DepartmentService<DD>>,
    listeners: Vec<ChangeListener>,
    departments: Vec<Department>,

    id: String,
    name: String,
    email: String,
    birth_date: Option<NaiveDate>,
    base_salary: String,
    department_id: Option<i32>,

    field_errors: BTreeMap<&'static str, String>,
    error: Option<String>,
}

impl<D, DD> Default for SellerForm<D, DD> {
    fn default() -> Self {
        Self {
            entity: None,
            service: None,
            department_service: None,
            listeners: Vec::new(),
            departments: Vec::new(),
            id: String::new(),
            name: String::new(),
            email: String::new(),
            birth_date: None,
            base_salary: String::new(),
            department_id: None,
            field_errors: BTreeMap::new(),
            error: None,
        }
    }
}

impl<D: SellerDao, DD: Dao<Department>> SellerForm<D, DD> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entity(&mut self, entity: Seller) {
        self.entity = Some(entity);
    }

    pub fn set_services(&mut self, service: SellerService<D>, department_service: DepartmentService<DD>) {
        self.service = Some(service);
        self.department_service = Some(department_service);
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Fetch the departments offered in the department selector.
    pub async fn load_associated_objects(&mut self) -> Result<()> {
        let service = self
            .department_service
            .as_ref()
            .ok_or_else(|| AppError::precondition("Department service was not set"))?;
        let departments = service.find_all().await?;
        self.departments = departments;
        Ok(())
    }

    /// Copy the entity's fields into the form.
    ///
    /// An unsaved seller starts with an empty birth date so the user has to
    /// pick one.
    pub fn update_form_data(&mut self) -> Result<()> {
        let entity = self
            .entity
            .as_ref()
            .ok_or_else(|| AppError::precondition(ENTITY_NOT_SET))?;

        self.id = entity.id.map(|id| id.to_string()).unwrap_or_default();
        self.name = entity.name.clone();
        self.email = entity.email.clone();
        self.birth_date = entity.id.map(|_| entity.birth_date);
        self.base_salary = if entity.is_new() {
            String::new()
        } else {
            salary_text(entity.base_salary)
        };
        self.department_id = entity.department_id;
        self.field_errors.clear();
        self.error = None;
        Ok(())
    }

    pub fn is_editing(&self) -> bool {
        self.entity.as_ref().is_some_and(|e| e.id.is_some())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn base_salary(&self) -> &str {
        &self.base_salary
    }

    pub fn department_id(&self) -> Option<i32> {
        self.department_id
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Validation message for one of the [`field`] keys.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Database error shown below the fields.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn input_name(&mut self, text: &str) {
        self.name = constraints::max_length(&self.name, text, NAME_MAX_LEN).to_string();
    }

    pub fn input_email(&mut self, text: &str) {
        self.email = constraints::max_length(&self.email, text, EMAIL_MAX_LEN).to_string();
    }

    pub fn input_birth_date(&mut self, date: Option<NaiveDate>) {
        self.birth_date = date;
    }

    pub fn input_base_salary(&mut self, text: &str) {
        self.base_salary = constraints::decimal(&self.base_salary, text).to_string();
    }

    pub fn select_department(&mut self, department_id: Option<i32>) {
        self.department_id = department_id;
    }

    pub async fn handle(&mut self, command: FormCommand) -> Result<FormOutcome<Seller>> {
        match command {
            FormCommand::Save => self.save().await,
            FormCommand::Cancel => Ok(FormOutcome::Cancelled),
        }
    }

    /// Validate and store the form's fields.
    pub async fn save(&mut self) -> Result<FormOutcome<Seller>> {
        if self.entity.is_none() {
            return Err(AppError::precondition(ENTITY_NOT_SET));
        }
        if self.service.is_none() {
            return Err(AppError::precondition(SERVICE_NOT_SET));
        }

        let seller = match self.form_data() {
            Some(seller) => seller,
            None => return Ok(FormOutcome::Open),
        };

        let service = self
            .service
            .as_ref()
            .ok_or_else(|| AppError::precondition(SERVICE_NOT_SET))?;
        let result = service.save_or_update(&seller).await;

        match result {
            Ok(saved) => {
                self.entity = Some(saved.clone());
                self.error = None;
                self.listeners.retain(|listener| listener.send(DataChanged).is_ok());
                Ok(FormOutcome::Saved(saved))
            }
            Err(e @ (AppError::Database(_) | AppError::Validation(_))) => {
                warn!("Error saving seller: {}", e);
                self.error = Some(e.to_string());
                Ok(FormOutcome::Open)
            }
            Err(e) => Err(e),
        }
    }

    /// Build a seller from the fields, recording a message per invalid field.
    ///
    /// Returns `None` when any field is invalid.
    fn form_data(&mut self) -> Option<Seller> {
        self.field_errors.clear();

        if self.name.trim().is_empty() {
            self.field_errors.insert(field::NAME, REQUIRED.to_string());
        }
        if self.email.trim().is_empty() {
            self.field_errors.insert(field::EMAIL, REQUIRED.to_string());
        }
        if self.birth_date.is_none() {
            self.field_errors.insert(field::BIRTH_DATE, REQUIRED.to_string());
        }
        let base_salary = match self.base_salary.trim() {
            "" => {
                self.field_errors.insert(field::BASE_SALARY, REQUIRED.to_string());
                None
            }
            text => match text.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    self.field_errors
                        .insert(field::BASE_SALARY, "Invalid number".to_string());
                    None
                }
            },
        };

        match (self.birth_date, base_salary) {
            (Some(birth_date), Some(base_salary)) if self.field_errors.is_empty() => Some(Seller {
                id: self.id.trim().parse().ok(),
                name: self.name.clone(),
                email: self.email.clone(),
                birth_date,
                base_salary,
                department_id: self.department_id,
            }),
            _ => None,
        }
    }
}

/// Salary as editable text: two decimals when that is exact, otherwise every
/// stored digit so an untouched field saves the same value back.
fn salary_text(value: f64) -> String {
    let cents = format!("{:.2}", value);
    if cents.parse::<f64>() == Ok(value) {
        cents
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_text_keeps_cents() {
        assert_eq!(salary_text(3500.5), "3500.50");
        assert_eq!(salary_text(0.0), "0.00");
    }

    #[test]
    fn test_salary_text_keeps_extra_precision() {
        assert_eq!(salary_text(1234.567), "1234.567");
        assert_eq!(salary_text(1234.567).parse::<f64>(), Ok(1234.567));
    }
}
