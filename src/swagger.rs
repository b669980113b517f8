use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::payment::submit_payment,
        handlers::payment::get_payments,
        handlers::catalog::get_payment_categories,
        handlers::catalog::get_payment_methods,
    ),
    components(
        schemas(
            SubmitPaymentRequest,
            SubmitPaymentResponse,
            PaymentResponse,
            BusSubscriptionResponse,
            PaymentCategoryResponse,
            PaymentMethodResponse,
            PaginationParams,
            crate::entities::PaymentStatus,
            crate::entities::BusPeriodicity,
            crate::entities::BusSubscriptionStatus,
        )
    ),
    tags(
        (name = "payments", description = "Payment submission and listing"),
        (name = "catalog", description = "Payment categories and methods")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
