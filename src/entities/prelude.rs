pub use super::department::Entity as Departments;
pub use super::seller::Entity as Sellers;
