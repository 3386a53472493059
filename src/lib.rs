pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;
pub mod workflow;

pub use error::{AppError, Result};
