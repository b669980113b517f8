use crate::models::*;
use crate::services::PaymentService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = SubmitPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded, with bus subscription when the category requires one", body = SubmitPaymentResponse),
        (status = 400, description = "Per-field validation errors"),
        (status = 500, description = "Persistence failure, nothing was written")
    )
)]
pub async fn submit_payment(
    payment_service: web::Data<PaymentService>,
    request: web::Json<SubmitPaymentRequest>,
) -> Result<HttpResponse> {
    match payment_service.submit(request.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/payments",
    tag = "payments",
    params(
        ("student_id" = Option<i64>, Query, description = "Filter by student"),
        ("page" = Option<i64>, Query, description = "Page number"),
        ("page_size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Paginated payment list")
    )
)]
pub async fn get_payments(
    payment_service: web::Data<PaymentService>,
    query: web::Query<PaymentQuery>,
) -> Result<HttpResponse> {
    match payment_service.list_payments(&query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn payment_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("", web::post().to(submit_payment))
            .route("", web::get().to(get_payments)),
    );
}
