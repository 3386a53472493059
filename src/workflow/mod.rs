//! Toolkit-independent form and list controllers.
//!
//! Each user action maps to a command handled by a controller. Forms report
//! successful saves to their subscribers over a channel; lists own the
//! receiving end and reload themselves when notified.

use tokio::sync::mpsc::UnboundedSender;

pub mod constraints;
pub mod department_form;
pub mod department_list;
pub mod seller_form;
pub mod seller_list;

pub use department_form::DepartmentForm;
pub use department_list::DepartmentList;
pub use seller_form::SellerForm;
pub use seller_list::SellerList;

pub(crate) const ENTITY_NOT_SET: &str = "Entity was not set";
pub(crate) const SERVICE_NOT_SET: &str = "Service was not set";

/// A record was saved through a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChanged;

/// Sending side of a change notification channel.
pub type ChangeListener = UnboundedSender<DataChanged>;

/// User actions on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    Save,
    Cancel,
}

/// What the form window should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<T> {
    /// Stay open; field or database errors are shown inline.
    Open,
    /// The record was stored; close the form.
    Saved(T),
    /// Closed without side effects.
    Cancelled,
}

/// User actions on a list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListCommand<T> {
    New,
    Edit(T),
    Delete(T),
}

impl<T> ListCommand<T> {
    /// What the command does, for error messages ("Error {action} seller").
    pub fn action(&self) -> &'static str {
        match self {
            ListCommand::New => "opening new",
            ListCommand::Edit(_) => "opening",
            ListCommand::Delete(_) => "removing",
        }
    }
}

/// Result of a list command.
pub enum ListOutcome<F> {
    /// Open this form as a modal window.
    OpenForm(F),
    /// Rows were reloaded.
    Refreshed,
}
