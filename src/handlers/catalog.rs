// src/handlers/catalog.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::catalog::{ChainResponse, StoreQuery, StoreResponse};
use crate::error::AppError;
use crate::extract::ValidQuery;
use crate::models::StoreFilter;
use crate::state::AppState;

// GET /chains - List chains by name
#[instrument(skip(state))]
pub async fn list_chains(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChainResponse>>, AppError> {
    let chains = state.catalog.list_chains().await?;

    Ok(Json(chains.into_iter().map(ChainResponse::from).collect()))
}

// GET /stores?chain_id=&city= - List stores by city, then name
#[instrument(skip(state))]
pub async fn list_stores(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<StoreQuery>,
) -> Result<Json<Vec<StoreResponse>>, AppError> {
    let filter = StoreFilter::from(query);

    let stores = state.catalog.list_stores(&filter).await?;

    Ok(Json(stores.into_iter().map(StoreResponse::from).collect()))
}
