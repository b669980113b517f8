use crate::entities::{
    payment_categories::BUS_SUBSCRIPTION_CATEGORY, payment_category_entity as categories,
    payment_method_entity as methods,
};
use crate::error::AppResult;
use crate::models::{PaymentCategoryResponse, PaymentMethodResponse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// Base payment methods every school deployment starts with.
const BASE_METHODS: [(&str, &str); 4] = [
    ("Espèces", "Paiement en espèces"),
    (
        "Mobile Money",
        "Paiement par Mobile Money (Orange Money, MTN, etc.)",
    ),
    ("Chèque", "Paiement par chèque bancaire"),
    ("Virement", "Virement bancaire"),
];

#[derive(Clone)]
pub struct CatalogService {
    pool: std::sync::Arc<DatabaseConnection>,
}

impl CatalogService {
    pub fn new(pool: impl Into<std::sync::Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    pub async fn list_categories(&self) -> AppResult<Vec<PaymentCategoryResponse>> {
        let list = categories::Entity::find()
            .filter(categories::Column::Active.eq(true))
            .order_by_asc(categories::Column::Name)
            .all(self.pool.as_ref())
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn list_methods(&self) -> AppResult<Vec<PaymentMethodResponse>> {
        let list = methods::Entity::find()
            .filter(methods::Column::Active.eq(true))
            .order_by_asc(methods::Column::Name)
            .all(self.pool.as_ref())
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// Idempotent seeding of the bus category and the base payment
    /// methods, run once at startup.
    pub async fn ensure_defaults(&self) -> AppResult<()> {
        let existing = categories::Entity::find()
            .filter(categories::Column::Name.eq(BUS_SUBSCRIPTION_CATEGORY))
            .one(self.pool.as_ref())
            .await?;
        if existing.is_none() {
            categories::ActiveModel {
                name: Set(BUS_SUBSCRIPTION_CATEGORY.to_string()),
                description: Set(Some(
                    "Paiement pour l'abonnement au transport scolaire".to_string(),
                )),
                active: Set(true),
                ..Default::default()
            }
            .insert(self.pool.as_ref())
            .await?;
            log::info!("Created payment category '{BUS_SUBSCRIPTION_CATEGORY}'");
        }

        for (name, description) in BASE_METHODS {
            let existing = methods::Entity::find()
                .filter(methods::Column::Name.eq(name))
                .one(self.pool.as_ref())
                .await?;
            if existing.is_none() {
                methods::ActiveModel {
                    name: Set(name.to_string()),
                    description: Set(Some(description.to_string())),
                    extra_fees: Set(0),
                    active: Set(true),
                    ..Default::default()
                }
                .insert(self.pool.as_ref())
                .await?;
                log::info!("Created payment method '{name}'");
            }
        }

        Ok(())
    }
}
