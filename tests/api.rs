use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use supermarket_compare::{
    catalog::{self, CatalogStore, InMemoryCatalog},
    config::CatalogSource,
    routes,
    state::AppState,
};
use testresult::TestResult;
use tower::ServiceExt;

fn build_test_router() -> Router {
    let catalog = InMemoryCatalog::demo().expect("demo catalog should load");

    routes::app(AppState::new(Arc::new(catalog)))
}

async fn send(app: Router, request: Request<Body>) -> TestResult<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };

    Ok((status, json))
}

async fn get(uri: &str) -> TestResult<(StatusCode, Value)> {
    let request = Request::builder().uri(uri).body(Body::empty())?;

    send(build_test_router(), request).await
}

async fn compare(payload: Value) -> TestResult<(StatusCode, Value)> {
    let request = Request::builder()
        .method("POST")
        .uri("/basket/compare")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))?;

    send(build_test_router(), request).await
}

#[tokio::test]
async fn home_reports_alive() -> TestResult {
    let (status, json) = get("/").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    Ok(())
}

#[tokio::test]
async fn chains_are_listed_by_name() -> TestResult {
    let (status, json) = get("/chains").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"id": 2, "name": "Rami Levy"},
            {"id": 1, "name": "Shufersal"},
            {"id": 3, "name": "Victory"}
        ])
    );

    Ok(())
}

#[tokio::test]
async fn stores_filter_by_chain_and_city() -> TestResult {
    let (status, json) = get("/stores?chain_id=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"id": 2, "name": "Shufersal Sheli Merkaz", "city": "Haifa", "chain_id": 1},
            {"id": 1, "name": "Shufersal Deal Dizengoff", "city": "Tel Aviv", "chain_id": 1}
        ])
    );

    let (status, json) = get("/stores?city=aviv").await?;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json
        .as_array()
        .map(|stores| stores.iter().filter_map(|s| s["id"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![1, 5]);

    Ok(())
}

#[tokio::test]
async fn product_search_respects_limit_and_name_order() -> TestResult {
    let (status, json) = get("/products/search?q=mi&limit=1").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([{
            "id": 1,
            "name": "Milk 3% 1L",
            "brand": "Tnuva",
            "quantity": "1 L",
            "category": "Dairy"
        }])
    );

    Ok(())
}

#[tokio::test]
async fn product_search_validates_parameters() -> TestResult {
    for uri in [
        "/products/search?q=m",
        "/products/search",
        "/products/search?q=milk&limit=0",
        "/products/search?q=milk&limit=101",
    ] {
        let (status, json) = get(uri).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "status for {uri}");
        assert_eq!(json["code"], "validation_error", "code for {uri}");
    }

    Ok(())
}

#[tokio::test]
async fn malformed_query_parameters_are_validation_errors() -> TestResult {
    for uri in ["/products/search?q=mi&limit=abc", "/stores?chain_id=x"] {
        let (status, json) = get(uri).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "status for {uri}");
        assert_eq!(json["code"], "validation_error", "code for {uri}");
        assert!(json["error"].is_string(), "message for {uri}");
    }

    Ok(())
}

#[tokio::test]
async fn malformed_basket_bodies_are_validation_errors() -> TestResult {
    let (status, json) = compare(json!({"items": [{"product_id": 1, "quantity": "two"}]})).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "validation_error");

    let request = Request::builder()
        .method("POST")
        .uri("/basket/compare")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"items\": ["))?;
    let (status, json) = send(build_test_router(), request).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "validation_error");

    let request = Request::builder()
        .method("POST")
        .uri("/basket/compare")
        .body(Body::from(r#"{"items": []}"#))?;
    let (status, json) = send(build_test_router(), request).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "validation_error");

    Ok(())
}

#[tokio::test]
async fn compare_ranks_fully_priced_stores() -> TestResult {
    let (status, json) = compare(json!({
        "items": [{"product_id": 1, "quantity": 2}, {"product_id": 2, "quantity": 1}],
        "city": "Tel Aviv"
    }))
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "items": [{"product_id": 1, "quantity": 2}, {"product_id": 2, "quantity": 1}],
            "results": [
                {
                    "chain_id": 3,
                    "chain_name": "Victory",
                    "store_id": 5,
                    "store_name": "Victory Ibn Gabirol",
                    "city": "Tel Aviv",
                    "total_price": "19.10",
                    "currency": "ILS"
                },
                {
                    "chain_id": 1,
                    "chain_name": "Shufersal",
                    "store_id": 1,
                    "store_name": "Shufersal Deal Dizengoff",
                    "city": "Tel Aviv",
                    "total_price": "19.40",
                    "currency": "ILS"
                }
            ]
        })
    );

    Ok(())
}

#[tokio::test]
async fn compare_drops_stores_without_full_coverage() -> TestResult {
    let (status, json) = compare(json!({
        "items": [{"product_id": 2, "quantity": 1}],
        "chain_ids": [2]
    }))
    .await?;

    // Only Modiin carries bread among Rami Levy stores.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["results"][0]["store_id"], 4);

    Ok(())
}

#[tokio::test]
async fn compare_rejects_empty_basket() -> TestResult {
    let (status, json) = compare(json!({"items": []})).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_basket");

    Ok(())
}

#[tokio::test]
async fn compare_rejects_non_positive_quantity() -> TestResult {
    let (status, json) = compare(json!({"items": [{"product_id": 1, "quantity": 0}]})).await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "validation_error");

    Ok(())
}

#[tokio::test]
async fn compare_with_unknown_chain_finds_no_stores() -> TestResult {
    let (status, json) = compare(json!({
        "items": [{"product_id": 1, "quantity": 1}],
        "chain_ids": [99]
    }))
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "no_matching_stores");

    Ok(())
}

#[tokio::test]
async fn compare_with_unpriced_product_returns_empty_results() -> TestResult {
    let (status, json) = compare(json!({"items": [{"product_id": 42, "quantity": 1}]})).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"], json!([]));

    Ok(())
}

#[tokio::test]
async fn memory_source_opens_demo_catalog() -> TestResult {
    let catalog = catalog::open(&CatalogSource::Memory { fixtures: None }).await?;

    assert_eq!(catalog.list_chains().await?.len(), 3);

    Ok(())
}
