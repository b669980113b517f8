use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "EN_ATTENTE")]
    #[serde(rename = "EN_ATTENTE")]
    Pending,
    #[sea_orm(string_value = "VALIDE")]
    #[serde(rename = "VALIDE")]
    Validated,
    #[sea_orm(string_value = "ANNULE")]
    #[serde(rename = "ANNULE")]
    Cancelled,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "EN_ATTENTE"),
            PaymentStatus::Validated => write!(f, "VALIDE"),
            PaymentStatus::Cancelled => write!(f, "ANNULE"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub category_id: i64,
    pub method_id: i64,
    /// Whole Guinean francs; the GNF has no minor unit.
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
    pub status: PaymentStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
