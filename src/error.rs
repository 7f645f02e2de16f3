// src/error.rs
use axum::{response::{IntoResponse, Response}, Json};
use http::StatusCode;
use serde::Serialize;
use tracing::error;

use crate::catalog::CatalogError;
use crate::services::comparator::CompareError;

#[derive(Debug)]
pub enum AppError {
    CatalogError(CatalogError),
    ValidationError(String),
    InvalidBasket(String),
    NoMatchingStores(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'static str,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CatalogError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidBasket(_) => StatusCode::BAD_REQUEST,
            AppError::NoMatchingStores(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::CatalogError(_) => "internal_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::InvalidBasket(_) => "invalid_basket",
            AppError::NoMatchingStores(_) => "no_matching_stores",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let error_message = match &self {
            AppError::CatalogError(e) => {
                error!(error = ?e, "Catalog lookup failed");
                "Catalog error occurred"
            }
            AppError::ValidationError(msg)
            | AppError::InvalidBasket(msg)
            | AppError::NoMatchingStores(msg) => msg.as_str(),
        };

        (status, Json(ErrorBody { error: error_message, code })).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::CatalogError(err)
    }
}

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::InvalidBasket => AppError::InvalidBasket("Basket is empty".to_string()),
            CompareError::InvalidQuantity { .. } | CompareError::TotalOverflow { .. } => {
                AppError::ValidationError(err.to_string())
            }
            CompareError::NoMatchingStores => {
                AppError::NoMatchingStores("No stores match the requested filters".to_string())
            }
            CompareError::Catalog(e) => AppError::CatalogError(e),
        }
    }
}
