use crate::models::ApiResponse;
use crate::services::CatalogService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/payment-categories",
    tag = "catalog",
    responses(
        (status = 200, description = "Active payment categories", body = Vec<crate::models::PaymentCategoryResponse>)
    )
)]
pub async fn get_payment_categories(
    catalog_service: web::Data<CatalogService>,
) -> Result<HttpResponse> {
    match catalog_service.list_categories().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/payment-methods",
    tag = "catalog",
    responses(
        (status = 200, description = "Active payment methods", body = Vec<crate::models::PaymentMethodResponse>)
    )
)]
pub async fn get_payment_methods(
    catalog_service: web::Data<CatalogService>,
) -> Result<HttpResponse> {
    match catalog_service.list_methods().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn catalog_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/payment-categories", web::get().to(get_payment_categories))
        .route("/payment-methods", web::get().to(get_payment_methods));
}
