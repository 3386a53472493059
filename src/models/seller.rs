//! Seller record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::seller;

/// A seller row. `id` stays `None` until the database assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub base_salary: f64,
    pub department_id: Option<i32>,
}

impl Seller {
    /// Whether the record has never been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl Default for Seller {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            birth_date: NaiveDate::default(),
            base_salary: 0.0,
            department_id: None,
        }
    }
}

impl From<seller::Model> for Seller {
    fn from(model: seller::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            email: model.email,
            birth_date: model.birth_date,
            base_salary: model.base_salary,
            department_id: model.department_id,
        }
    }
}
