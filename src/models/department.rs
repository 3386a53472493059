//! Department record.

use serde::{Deserialize, Serialize};

use crate::entities::department;

/// A department row. `id` stays `None` until the database assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: Option<i32>,
    pub name: String,
}

impl Department {
    /// Create an unsaved department.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Whether the record has never been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl From<department::Model> for Department {
    fn from(model: department::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
        }
    }
}
