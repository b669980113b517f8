use crate::entities::{BusPeriodicity, PaymentStatus, payment_entity as payments};
use crate::models::BusSubscriptionResponse;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat field set of one payment form submission.
///
/// Bus fields are optional at the wire level; whether they are required
/// depends on the selected category (see `payment_form`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitPaymentRequest {
    pub student_id: i64,
    pub category_id: i64,
    pub method_id: i64,
    /// Whole Guinean francs.
    pub amount: i64,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub bus_periodicity: Option<BusPeriodicity>,
    #[serde(default)]
    pub bus_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub bus_expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub bus_zone: Option<String>,
    #[serde(default)]
    pub bus_stop_point: Option<String>,
    #[serde(default)]
    pub bus_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i64,
    pub student_id: i64,
    pub category_id: i64,
    pub method_id: i64,
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<payments::Model> for PaymentResponse {
    fn from(m: payments::Model) -> Self {
        Self {
            id: m.id,
            student_id: m.student_id,
            category_id: m.category_id,
            method_id: m.method_id,
            amount: m.amount,
            payment_date: m.payment_date,
            notes: m.notes,
            status: m.status,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitPaymentResponse {
    pub payment: PaymentResponse,
    /// Present only when the payment category is "Abonnement Bus".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_subscription: Option<BusSubscriptionResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentQuery {
    pub student_id: Option<i64>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
