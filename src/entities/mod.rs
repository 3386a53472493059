//! SeaORM entities mirroring the database tables.

pub mod department;
pub mod prelude;
pub mod seller;
