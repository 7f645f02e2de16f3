use axum::{routing::post, Router};
use crate::handlers::basket::compare_basket;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/basket/compare", post(compare_basket))
}
