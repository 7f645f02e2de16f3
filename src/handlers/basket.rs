// src/handlers/basket.rs
use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::dtos::basket::{BasketCompareRequest, BasketCompareResponse, BasketPriceForStore};
use crate::error::AppError;
use crate::extract::ValidJson;
use crate::services::comparator;
use crate::state::AppState;

// POST /basket/compare - Rank stores by basket total
#[instrument(skip(state, payload), fields(items = payload.items.len()))]
pub async fn compare_basket(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<BasketCompareRequest>,
) -> Result<Json<BasketCompareResponse>, AppError> {
    let filter = payload.filter();

    let results = comparator::compare(state.catalog.as_ref(), &payload.items, &filter).await?;

    info!(stores = results.len(), "Basket compared");

    Ok(Json(BasketCompareResponse {
        items: payload.items,
        results: results.into_iter().map(BasketPriceForStore::from).collect(),
    }))
}
