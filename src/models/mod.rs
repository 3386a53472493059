//! Domain records for departments and sellers.

pub mod department;
pub mod seller;

pub use department::Department;
pub use seller::Seller;
