//! Service layer: thin facades over the DAOs.

pub mod department;
pub mod seller;

pub use department::DepartmentService;
pub use seller::SellerService;
