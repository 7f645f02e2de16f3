// src/dtos/basket.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BasketItem, StoreFilter, StoreResult};

#[derive(Debug, Deserialize)]
pub struct BasketCompareRequest {
    pub items: Vec<BasketItem>,
    #[serde(default)]
    pub chain_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub city: Option<String>,
}

impl BasketCompareRequest {
    pub fn filter(&self) -> StoreFilter {
        StoreFilter {
            chain_ids: self.chain_ids.clone(),
            city: self.city.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BasketPriceForStore {
    pub chain_id: i64,
    pub chain_name: String,
    pub store_id: i64,
    pub store_name: String,
    pub city: Option<String>,
    pub total_price: Decimal,
    pub currency: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BasketCompareResponse {
    pub items: Vec<BasketItem>,
    pub results: Vec<BasketPriceForStore>,
}

impl From<StoreResult> for BasketPriceForStore {
    fn from(result: StoreResult) -> Self {
        Self {
            chain_id: result.chain.id,
            chain_name: result.chain.name,
            store_id: result.store.id,
            store_name: result.store.name,
            city: result.store.city,
            total_price: result.total_price,
            currency: result.currency,
        }
    }
}
