pub mod bus_subscription;
pub mod catalog;
pub mod common;
pub mod pagination;
pub mod payment;
pub mod payment_form;

pub use bus_subscription::*;
pub use catalog::*;
pub use common::*;
pub use pagination::*;
pub use payment::*;
pub use payment_form::*;
