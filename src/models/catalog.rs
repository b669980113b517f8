use crate::entities::{payment_category_entity as categories, payment_method_entity as methods};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentCategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<categories::Model> for PaymentCategoryResponse {
    fn from(m: categories::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentMethodResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub extra_fees: i64,
}

impl From<methods::Model> for PaymentMethodResponse {
    fn from(m: methods::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            extra_fees: m.extra_fees,
        }
    }
}
