//! Database connection pool and data access objects.

pub mod connection;
pub mod dao;
pub mod department;
pub mod factory;
pub mod seller;

pub use connection::{TableCounts, connect, connect_options, ensure_schema, get_table_counts, test_connection};
pub use dao::Dao;
pub use department::DepartmentDaoSql;
pub use factory::DaoFactory;
pub use seller::{SellerDao, SellerDaoSql};
