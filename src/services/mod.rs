pub mod catalog_service;
pub mod payment_service;

pub use catalog_service::*;
pub use payment_service::*;
