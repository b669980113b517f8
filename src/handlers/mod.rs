pub mod catalog;
pub mod payment;

pub use catalog::catalog_config;
pub use payment::payment_config;
