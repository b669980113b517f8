pub mod bus_subscriptions;
pub mod payment_categories;
pub mod payment_methods;
pub mod payments;
pub mod students;

pub use bus_subscriptions as bus_subscription_entity;
pub use payment_categories as payment_category_entity;
pub use payment_methods as payment_method_entity;
pub use payments as payment_entity;
pub use students as student_entity;

pub use bus_subscriptions::{BusPeriodicity, BusSubscriptionStatus};
pub use payments::PaymentStatus;
pub use students::StudentStatus;
