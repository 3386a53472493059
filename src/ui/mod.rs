//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod department_panel;
pub mod seller_panel;

pub use app::App;
