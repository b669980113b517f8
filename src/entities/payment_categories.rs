use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category name that switches the payment form into the bus
/// subscription flow.
pub const BUS_SUBSCRIPTION_CATEGORY: &str = "Abonnement Bus";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

impl Model {
    pub fn is_bus_subscription(&self) -> bool {
        self.name == BUS_SUBSCRIPTION_CATEGORY
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
