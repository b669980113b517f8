//! Conditional validation of one payment submission.
//!
//! The required-field set depends on the selected category: the
//! "Abonnement Bus" category pulls in the bus subscription subset,
//! every other category ignores those fields. Validation is pure; it
//! never touches the database and never mutates its input.

use crate::entities::BusPeriodicity;
use crate::error::FieldErrors;
use crate::models::SubmitPaymentRequest;
use chrono::NaiveDate;

/// Subscription fields, present only for the bus category. Each
/// variant of [`CategoryFields`] carries its own required set, so the
/// conditional rules live in the type rather than in field-by-field
/// introspection at the call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusSubscriptionFields {
    pub periodicity: BusPeriodicity,
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub zone: String,
    pub stop_point: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFields {
    Standard,
    BusSubscription(BusSubscriptionFields),
}

impl CategoryFields {
    pub fn bus(&self) -> Option<&BusSubscriptionFields> {
        match self {
            CategoryFields::BusSubscription(fields) => Some(fields),
            CategoryFields::Standard => None,
        }
    }
}

/// A submission that passed every field rule and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayment {
    pub student_id: i64,
    pub category_id: i64,
    pub method_id: i64,
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
    pub category: CategoryFields,
}

impl ValidatedPayment {
    /// Validates the flat submission. `category_is_bus` is decided by
    /// the caller from the resolved category row.
    ///
    /// Errors are aggregated per field; one failing field fails the
    /// whole submission and nothing is persisted.
    pub fn from_request(
        req: &SubmitPaymentRequest,
        category_is_bus: bool,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        if req.amount <= 0 {
            errors.add("amount", "Le montant doit être supérieur à zéro");
        }

        // Expiration must be strictly after start whenever both dates
        // were supplied, independent of the selected category.
        if let (Some(start), Some(expiration)) = (req.bus_start_date, req.bus_expiration_date)
            && expiration <= start
        {
            errors.add(
                "bus_expiration_date",
                "La date d'expiration doit être postérieure à la date de début",
            );
        }

        let category = if category_is_bus {
            match Self::bus_fields(req, &mut errors) {
                Some(fields) => CategoryFields::BusSubscription(fields),
                None => {
                    // errors carry the missing-field detail
                    return Err(errors);
                }
            }
        } else {
            // Non-bus categories: subscription fields are ignored, their
            // absence is never an error.
            CategoryFields::Standard
        };

        errors.into_result()?;

        Ok(Self {
            student_id: req.student_id,
            category_id: req.category_id,
            method_id: req.method_id,
            amount: req.amount,
            payment_date: req.payment_date,
            notes: trimmed(&req.notes),
            category,
        })
    }

    fn bus_fields(
        req: &SubmitPaymentRequest,
        errors: &mut FieldErrors,
    ) -> Option<BusSubscriptionFields> {
        let periodicity = req.bus_periodicity;
        if periodicity.is_none() {
            errors.add("bus_periodicity", "La périodicité est obligatoire");
        }
        if req.bus_start_date.is_none() {
            errors.add("bus_start_date", "La date de début est obligatoire");
        }
        if req.bus_expiration_date.is_none() {
            errors.add("bus_expiration_date", "La date d'expiration est obligatoire");
        }
        let zone = required_text(&req.bus_zone);
        if zone.is_none() {
            errors.add("bus_zone", "La zone est obligatoire");
        }
        let stop_point = required_text(&req.bus_stop_point);
        if stop_point.is_none() {
            errors.add("bus_stop_point", "Le point d'arrêt est obligatoire");
        }

        Some(BusSubscriptionFields {
            periodicity: periodicity?,
            start_date: req.bus_start_date?,
            expiration_date: req.bus_expiration_date?,
            zone: zone?,
            stop_point: stop_point?,
            notes: trimmed(&req.bus_notes),
        })
    }
}

fn required_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bus_request() -> SubmitPaymentRequest {
        SubmitPaymentRequest {
            student_id: 1,
            category_id: 5,
            method_id: 2,
            amount: 50_000,
            payment_date: date(2025, 1, 1),
            notes: Some("Abonnement janvier".to_string()),
            bus_periodicity: Some(BusPeriodicity::Monthly),
            bus_start_date: Some(date(2025, 1, 1)),
            bus_expiration_date: Some(date(2025, 12, 31)),
            bus_zone: Some("Zone A".to_string()),
            bus_stop_point: Some("Central".to_string()),
            bus_notes: None,
        }
    }

    fn tuition_request() -> SubmitPaymentRequest {
        SubmitPaymentRequest {
            student_id: 1,
            category_id: 1,
            method_id: 2,
            amount: 250_000,
            payment_date: date(2025, 1, 1),
            notes: None,
            bus_periodicity: None,
            bus_start_date: None,
            bus_expiration_date: None,
            bus_zone: None,
            bus_stop_point: None,
            bus_notes: None,
        }
    }

    #[test]
    fn test_bus_submission_valid() {
        let validated = ValidatedPayment::from_request(&bus_request(), true).unwrap();
        let fields = validated.category.bus().expect("bus fields expected");
        assert_eq!(fields.periodicity, BusPeriodicity::Monthly);
        assert_eq!(fields.zone, "Zone A");
        assert_eq!(fields.stop_point, "Central");
        assert_eq!(validated.amount, 50_000);
    }

    #[test]
    fn test_missing_bus_fields_each_reported() {
        let mut req = bus_request();
        req.bus_periodicity = None;
        req.bus_zone = None;

        let errors = ValidatedPayment::from_request(&req, true).unwrap_err();
        assert!(errors.contains("bus_periodicity"));
        assert!(errors.contains("bus_zone"));
        assert!(!errors.contains("bus_stop_point"));
    }

    #[test]
    fn test_blank_zone_is_missing() {
        let mut req = bus_request();
        req.bus_zone = Some("   ".to_string());

        let errors = ValidatedPayment::from_request(&req, true).unwrap_err();
        assert!(errors.contains("bus_zone"));
    }

    #[test]
    fn test_expiration_before_start_rejected() {
        let mut req = bus_request();
        req.bus_expiration_date = Some(date(2024, 12, 31));

        let errors = ValidatedPayment::from_request(&req, true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("bus_expiration_date"));
    }

    #[test]
    fn test_expiration_equal_to_start_rejected() {
        let mut req = bus_request();
        req.bus_expiration_date = req.bus_start_date;

        let errors = ValidatedPayment::from_request(&req, true).unwrap_err();
        assert!(errors.contains("bus_expiration_date"));
    }

    #[test]
    fn test_date_ordering_checked_even_for_other_categories() {
        let mut req = tuition_request();
        req.bus_start_date = Some(date(2025, 6, 1));
        req.bus_expiration_date = Some(date(2025, 5, 1));

        let errors = ValidatedPayment::from_request(&req, false).unwrap_err();
        assert!(errors.contains("bus_expiration_date"));
    }

    #[test]
    fn test_other_category_ignores_absent_bus_fields() {
        let validated = ValidatedPayment::from_request(&tuition_request(), false).unwrap();
        assert_eq!(validated.category, CategoryFields::Standard);
    }

    #[test]
    fn test_amount_must_be_positive() {
        let mut req = tuition_request();
        req.amount = 0;

        let errors = ValidatedPayment::from_request(&req, false).unwrap_err();
        assert!(errors.contains("amount"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let req = bus_request();
        let first = ValidatedPayment::from_request(&req, true);
        let second = ValidatedPayment::from_request(&req, true);
        assert_eq!(first, second);

        let mut invalid = bus_request();
        invalid.bus_stop_point = None;
        let first = ValidatedPayment::from_request(&invalid, true);
        let second = ValidatedPayment::from_request(&invalid, true);
        assert_eq!(first.unwrap_err(), second.unwrap_err());
    }

    #[test]
    fn test_errors_aggregate_across_base_and_bus_fields() {
        let mut req = bus_request();
        req.amount = -5;
        req.bus_stop_point = None;

        let errors = ValidatedPayment::from_request(&req, true).unwrap_err();
        assert!(errors.contains("amount"));
        assert!(errors.contains("bus_stop_point"));
    }
}
