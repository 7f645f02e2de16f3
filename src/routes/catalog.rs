use axum::{routing::get, Router};
use crate::handlers::catalog::{list_chains, list_stores};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chains", get(list_chains))
        .route("/stores", get(list_stores))
}
