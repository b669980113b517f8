use crate::entities::{
    BusSubscriptionStatus, PaymentStatus, StudentStatus,
    bus_subscription_entity as subs, payment_category_entity as categories,
    payment_entity as payments, payment_method_entity as methods, student_entity as students,
};
use crate::error::{AppError, AppResult, FieldErrors};
use crate::models::{
    CategoryFields, PaginatedResponse, PaymentQuery, PaymentResponse, SubmitPaymentRequest,
    SubmitPaymentResponse, ValidatedPayment,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct PaymentService {
    pool: std::sync::Arc<DatabaseConnection>,
}

impl PaymentService {
    pub fn new(pool: impl Into<std::sync::Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    /// Validates then persists one submission.
    pub async fn submit(&self, req: SubmitPaymentRequest) -> AppResult<SubmitPaymentResponse> {
        let validated = self.validate(&req).await?;
        self.persist(validated).await
    }

    /// Resolves the submitted references and runs the field rules.
    ///
    /// Unresolvable references are reported on their own field, merged
    /// with whatever the pure validator finds, so the caller gets the
    /// complete picture in one round trip. Nothing is written here.
    pub async fn validate(&self, req: &SubmitPaymentRequest) -> AppResult<ValidatedPayment> {
        let mut errors = FieldErrors::new();

        let category = categories::Entity::find_by_id(req.category_id)
            .one(self.pool.as_ref())
            .await?
            .filter(|c| c.active);
        if category.is_none() {
            errors.add("category_id", "Type de paiement inconnu ou inactif");
        }

        let method = methods::Entity::find_by_id(req.method_id)
            .one(self.pool.as_ref())
            .await?
            .filter(|m| m.active);
        if method.is_none() {
            errors.add("method_id", "Mode de paiement inconnu ou inactif");
        }

        let student = students::Entity::find_by_id(req.student_id)
            .one(self.pool.as_ref())
            .await?
            .filter(|s| s.status == StudentStatus::Active);
        if student.is_none() {
            errors.add("student_id", "Élève inconnu ou inactif");
        }

        // With the category unresolved the conditional subset cannot be
        // decided; the category_id error above already fails the call.
        let category_is_bus = category.as_ref().is_some_and(|c| c.is_bus_subscription());

        match ValidatedPayment::from_request(req, category_is_bus) {
            Ok(validated) if errors.is_empty() => Ok(validated),
            Ok(_) => Err(AppError::FieldValidation(errors)),
            Err(field_errors) => {
                errors.merge(field_errors);
                Err(AppError::FieldValidation(errors))
            }
        }
    }

    /// Persists the payment and, for the bus category, its subscription
    /// in one transaction. Any insert failure propagates before the
    /// commit, so the transaction rolls back and neither row survives.
    pub async fn persist(&self, validated: ValidatedPayment) -> AppResult<SubmitPaymentResponse> {
        let txn = self.pool.begin().await?;

        let payment = payments::ActiveModel {
            student_id: Set(validated.student_id),
            category_id: Set(validated.category_id),
            method_id: Set(validated.method_id),
            amount: Set(validated.amount),
            payment_date: Set(validated.payment_date),
            notes: Set(validated.notes.clone()),
            status: Set(PaymentStatus::Pending),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let bus_subscription = match &validated.category {
            CategoryFields::BusSubscription(fields) => {
                let subscription = subs::ActiveModel {
                    payment_id: Set(payment.id),
                    student_id: Set(payment.student_id),
                    periodicity: Set(fields.periodicity),
                    start_date: Set(fields.start_date),
                    expiration_date: Set(fields.expiration_date),
                    zone: Set(fields.zone.clone()),
                    stop_point: Set(fields.stop_point.clone()),
                    notes: Set(fields.notes.clone()),
                    status: Set(BusSubscriptionStatus::Active),
                    amount: Set(payment.amount),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                Some(subscription)
            }
            CategoryFields::Standard => None,
        };

        txn.commit().await?;

        log::info!(
            "Payment {} recorded for student {} ({} GNF{})",
            payment.id,
            payment.student_id,
            payment.amount,
            if bus_subscription.is_some() {
                ", with bus subscription"
            } else {
                ""
            }
        );

        Ok(SubmitPaymentResponse {
            payment: payment.into(),
            bus_subscription: bus_subscription.map(Into::into),
        })
    }

    pub async fn list_payments(
        &self,
        query: &PaymentQuery,
    ) -> AppResult<PaginatedResponse<PaymentResponse>> {
        let params = crate::models::PaginationParams::new(query.page, query.page_size);

        let mut base_query = payments::Entity::find();
        if let Some(student_id) = query.student_id {
            base_query = base_query.filter(payments::Column::StudentId.eq(student_id));
        }

        let total = base_query.clone().count(self.pool.as_ref()).await? as i64;

        let items = base_query
            .order_by(payments::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(self.pool.as_ref())
            .await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(Into::into).collect(),
            params.page.unwrap_or(1),
            params.get_limit(),
            total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BusPeriodicity;
    use crate::models::BusSubscriptionFields;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

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
            notes: None,
            bus_periodicity: Some(BusPeriodicity::Monthly),
            bus_start_date: Some(date(2025, 1, 1)),
            bus_expiration_date: Some(date(2025, 12, 31)),
            bus_zone: Some("Zone A".to_string()),
            bus_stop_point: Some("Central".to_string()),
            bus_notes: None,
        }
    }

    fn validated_bus() -> ValidatedPayment {
        ValidatedPayment {
            student_id: 1,
            category_id: 5,
            method_id: 2,
            amount: 50_000,
            payment_date: date(2025, 1, 1),
            notes: None,
            category: CategoryFields::BusSubscription(BusSubscriptionFields {
                periodicity: BusPeriodicity::Monthly,
                start_date: date(2025, 1, 1),
                expiration_date: date(2025, 12, 31),
                zone: "Zone A".to_string(),
                stop_point: "Central".to_string(),
                notes: None,
            }),
        }
    }

    fn validated_tuition() -> ValidatedPayment {
        ValidatedPayment {
            student_id: 1,
            category_id: 1,
            method_id: 2,
            amount: 250_000,
            payment_date: date(2025, 1, 1),
            notes: None,
            category: CategoryFields::Standard,
        }
    }

    fn payment_row(id: i64) -> payments::Model {
        payments::Model {
            id,
            student_id: 1,
            category_id: 5,
            method_id: 2,
            amount: 50_000,
            payment_date: date(2025, 1, 1),
            notes: None,
            status: PaymentStatus::Pending,
            created_at: None,
        }
    }

    fn subscription_row(id: i64, payment_id: i64) -> subs::Model {
        subs::Model {
            id,
            payment_id,
            student_id: 1,
            periodicity: BusPeriodicity::Monthly,
            start_date: date(2025, 1, 1),
            expiration_date: date(2025, 12, 31),
            zone: "Zone A".to_string(),
            stop_point: "Central".to_string(),
            notes: None,
            status: BusSubscriptionStatus::Active,
            amount: 50_000,
            created_at: None,
        }
    }

    fn bus_category_row() -> categories::Model {
        categories::Model {
            id: 5,
            name: "Abonnement Bus".to_string(),
            description: None,
            active: true,
        }
    }

    fn method_row() -> methods::Model {
        methods::Model {
            id: 2,
            name: "Espèces".to_string(),
            description: None,
            extra_fees: 0,
            active: true,
        }
    }

    fn student_row() -> students::Model {
        students::Model {
            id: 1,
            first_name: "Mamadou".to_string(),
            last_name: "Diallo".to_string(),
            status: StudentStatus::Active,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_validate_resolves_references_and_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![bus_category_row()]])
            .append_query_results([vec![method_row()]])
            .append_query_results([vec![student_row()]])
            .into_connection();

        let service = PaymentService::new(db);
        let validated = service.validate(&bus_request()).await.unwrap();
        assert!(validated.category.bus().is_some());
    }

    #[tokio::test]
    async fn test_validate_unknown_category_reported_on_field() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<categories::Model>::new()])
            .append_query_results([vec![method_row()]])
            .append_query_results([vec![student_row()]])
            .into_connection();

        let service = PaymentService::new(db);
        let err = service.validate(&bus_request()).await.unwrap_err();
        match err {
            AppError::FieldValidation(errors) => {
                assert!(errors.contains("category_id"));
                // conditional subset undecidable without the category
                assert!(!errors.contains("bus_periodicity"));
            }
            other => panic!("expected field validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_validate_merges_referential_and_field_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![bus_category_row()]])
            .append_query_results([Vec::<methods::Model>::new()])
            .append_query_results([vec![student_row()]])
            .into_connection();

        let mut req = bus_request();
        req.bus_zone = None;

        let service = PaymentService::new(db);
        let err = service.validate(&req).await.unwrap_err();
        match err {
            AppError::FieldValidation(errors) => {
                assert!(errors.contains("method_id"));
                assert!(errors.contains("bus_zone"));
            }
            other => panic!("expected field validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_persist_bus_payment_returns_linked_pair() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![payment_row(42)]])
            .append_query_results([vec![subscription_row(7, 42)]])
            .into_connection();

        let service = PaymentService::new(db);
        let resp = service.persist(validated_bus()).await.unwrap();

        assert_eq!(resp.payment.id, 42);
        let subscription = resp.bus_subscription.expect("subscription expected");
        assert_eq!(subscription.payment_id, 42);
        assert_eq!(subscription.student_id, resp.payment.student_id);
        assert_eq!(subscription.amount, resp.payment.amount);
    }

    #[tokio::test]
    async fn test_persist_standard_payment_has_no_subscription() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![payment_row(43)]])
            .into_connection();

        let service = PaymentService::new(db);
        let resp = service.persist(validated_tuition()).await.unwrap();

        assert_eq!(resp.payment.id, 43);
        assert!(resp.bus_subscription.is_none());
    }

    #[tokio::test]
    async fn test_persist_subscription_failure_aborts_whole_submission() {
        // Payment insert succeeds, subscription insert fails: the error
        // must surface before commit so the transaction rolls back.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![payment_row(44)]])
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "constraint violation".to_string(),
            ))])
            .into_connection();

        let service = PaymentService::new(db);
        let err = service.persist(validated_bus()).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
