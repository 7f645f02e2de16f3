// src/handlers/product.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::product::{ProductResponse, ProductSearchQuery};
use crate::error::AppError;
use crate::extract::ValidQuery;
use crate::state::AppState;

// GET /products/search?q=&limit= - Case-insensitive name search
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ProductSearchQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let search = query.validate()?;

    let products = state
        .catalog
        .search_products(&search.query, search.limit)
        .await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
