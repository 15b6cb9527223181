//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for every creation failure that is not a domain rule violation.
pub const INVALID_DATA_MESSAGE: &str = "Invalid data provided";

/// Message returned for store faults that are not the caller's doing.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Domain rule violations. The display text is sent to clients verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Price must be between 1 and 30")]
    PriceOutOfRange { value: f64 },
}

/// Why a restaurant pizza could not be created.
#[derive(Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A foreign key did not resolve to an existing pizza or restaurant.
    #[error("unknown reference ({constraint})")]
    Reference { constraint: String },
    #[error("malformed input: {0}")]
    Malformed(String),
}

impl CreateError {
    /// Client-facing message. Only domain rule violations carry their own text.
    pub fn public_message(&self) -> String {
        match self {
            CreateError::Validation(e) => e.to_string(),
            CreateError::Reference { .. } | CreateError::Malformed(_) => INVALID_DATA_MESSAGE.to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            CreateError::Validation(_) => "validation",
            CreateError::Reference { .. } => "reference",
            CreateError::Malformed(_) => "malformed",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Create(#[from] CreateError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Classify a store error raised while inserting a row. Constraint and data errors are the
    /// caller's fault and become `CreateError`s; anything else stays a server fault.
    pub fn from_insert(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                // foreign_key_violation
                Some("23503") => {
                    return AppError::Create(CreateError::Reference {
                        constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                    })
                }
                // not_null_violation, check_violation, numeric_value_out_of_range,
                // invalid_text_representation
                Some("23502") | Some("23514") | Some("22003") | Some("22P02") => {
                    return AppError::Create(CreateError::Malformed(db_err.message().to_string()))
                }
                _ => {}
            }
        }
        AppError::Db(err)
    }
}

/// Body for not-found and server faults: `{"error": "..."}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for creation failures: `{"errors": ["..."]}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: format!("{} not found", entity),
                }),
            )
                .into_response(),
            AppError::Create(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "restaurant pizza rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorsBody {
                        errors: vec![e.public_message()],
                    }),
                )
                    .into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_uses_singular_error_key() {
        let (status, json) = render(AppError::NotFound("Restaurant")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "error": "Restaurant not found" }));
    }

    #[tokio::test]
    async fn validation_error_surfaces_its_message() {
        let err = CreateError::from(ValidationError::PriceOutOfRange { value: 31.0 });
        let (status, json) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "errors": ["Price must be between 1 and 30"] }));
    }

    #[tokio::test]
    async fn reference_and_malformed_errors_hide_details() {
        let reference = CreateError::Reference {
            constraint: "restaurant_pizzas_pizza_id_fkey".into(),
        };
        let (status, json) = render(reference.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "errors": ["Invalid data provided"] }));

        let malformed = CreateError::Malformed("missing field `price`".into());
        let (status, json) = render(malformed.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "errors": ["Invalid data provided"] }));
    }

    #[tokio::test]
    async fn database_fault_is_a_500_without_detail() {
        let (status, json) = render(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }

    #[test]
    fn non_database_errors_stay_server_faults() {
        assert!(matches!(AppError::from_insert(sqlx::Error::PoolClosed), AppError::Db(_)));
    }
}
