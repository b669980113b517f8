use crate::entities::{
    BusPeriodicity, BusSubscriptionStatus, bus_subscription_entity as subs,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusSubscriptionResponse {
    pub id: i64,
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
    pub created_at: DateTime<Utc>,
}

impl From<subs::Model> for BusSubscriptionResponse {
    fn from(m: subs::Model) -> Self {
        Self {
            id: m.id,
            payment_id: m.payment_id,
            student_id: m.student_id,
            periodicity: m.periodicity,
            start_date: m.start_date,
            expiration_date: m.expiration_date,
            zone: m.zone,
            stop_point: m.stop_point,
            notes: m.notes,
            status: m.status,
            amount: m.amount,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}
