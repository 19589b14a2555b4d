use std::time::Duration;

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Failure of a single document-store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid product ID")]
    InvalidId,

    #[error("Invalid request body")]
    InvalidBody,

    #[error("{0}")]
    Validation(&'static str),

    #[error("Product not found: {0}")]
    NotFound(ObjectId),

    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        source: StoreError,
    },

    /// A write succeeded but the follow-up read did not find the document.
    #[error("{message}: product {id} missing after write")]
    MissingAfterWrite { message: &'static str, id: ObjectId },
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Only the fixed client-facing message crosses into the response; the
/// store error stays in the logs.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId => AppError::BadRequest("Invalid product ID".to_string()),
            ProductError::InvalidBody => AppError::BadRequest("Invalid request body".to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg.to_string()),
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::Store { message, .. } => {
                AppError::InternalServerError(message.to_string())
            }
            ProductError::MissingAfterWrite { message, .. } => {
                AppError::InternalServerError(message.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
