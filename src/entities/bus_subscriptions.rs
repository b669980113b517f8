use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum BusPeriodicity {
    #[sea_orm(string_value = "MENSUEL")]
    #[serde(rename = "MENSUEL")]
    Monthly,
    #[sea_orm(string_value = "TRIMESTRIEL")]
    #[serde(rename = "TRIMESTRIEL")]
    Termly,
    #[sea_orm(string_value = "ANNUEL")]
    #[serde(rename = "ANNUEL")]
    Annual,
}

impl std::fmt::Display for BusPeriodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusPeriodicity::Monthly => write!(f, "MENSUEL"),
            BusPeriodicity::Termly => write!(f, "TRIMESTRIEL"),
            BusPeriodicity::Annual => write!(f, "ANNUEL"),
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum BusSubscriptionStatus {
    #[sea_orm(string_value = "ACTIF")]
    #[serde(rename = "ACTIF")]
    Active,
    #[sea_orm(string_value = "EXPIRE")]
    #[serde(rename = "EXPIRE")]
    Expired,
    #[sea_orm(string_value = "SUSPENDU")]
    #[serde(rename = "SUSPENDU")]
    Suspended,
}

impl std::fmt::Display for BusSubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusSubscriptionStatus::Active => write!(f, "ACTIF"),
            BusSubscriptionStatus::Expired => write!(f, "EXPIRE"),
            BusSubscriptionStatus::Suspended => write!(f, "SUSPENDU"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bus_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Originating payment; unique, a subscription never exists without it.
    pub payment_id: i64,
    pub student_id: i64,
    pub periodicity: BusPeriodicity,
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub zone: String,
    pub stop_point: String,
    pub notes: Option<String>,
    pub status: BusSubscriptionStatus,
    pub amount: i64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
