use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

pub type AppResult<T> = Result<T, AppError>;

/// Per-field validation messages, keyed by submitted field name.
///
/// Any entry fails the whole submission; the map is rendered verbatim
/// next to the offending fields by the boundary layer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|v| v.as_slice())
    }

    /// Fails with `Err(self)` if any field error was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Field validation failed")]
    FieldValidation(FieldErrors),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::FieldValidation(fields) => {
                log::warn!("Field validation failed: {fields:?}");
                HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "error": {
                        "code": "FIELD_VALIDATION_ERROR",
                        "message": "One or more fields are invalid",
                        "fields": fields
                    }
                }))
            }
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                error_body(
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg,
                )
            }
            AppError::NotFound(msg) => {
                error_body(actix_web::http::StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            // Persistence failures stay opaque: the transaction was rolled
            // back and no per-field detail is meaningful to the caller.
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                error_body(
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error",
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                error_body(
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error",
                )
            }
        }
    }
}

fn error_body(
    status_code: actix_web::http::StatusCode,
    error_code: &str,
    message: &str,
) -> HttpResponse {
    HttpResponse::build(status_code).json(json!({
        "success": false,
        "error": {
            "code": error_code,
            "message": message
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::new();
        errors.add("amount", "must be positive");
        errors.add("amount", "required");
        errors.add("bus_zone", "required");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages("amount").unwrap().len(), 2);
        assert!(errors.contains("bus_zone"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_field_errors_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_merge_keeps_both_sides() {
        let mut a = FieldErrors::new();
        a.add("category_id", "unknown category");
        let mut b = FieldErrors::new();
        b.add("bus_stop_point", "required");
        a.merge(b);
        assert_eq!(a.len(), 2);
    }
}
