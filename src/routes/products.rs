use axum::{routing::get, Router};
use crate::handlers::product::search_products;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/products/search", get(search_products))
}
