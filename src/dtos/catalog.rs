// src/dtos/catalog.rs
use serde::{Deserialize, Serialize};

use crate::models::{Chain, Store, StoreFilter};

#[derive(Debug, Deserialize)]
pub struct StoreQuery {
    pub chain_id: Option<i64>,
    pub city: Option<String>,
}

impl From<StoreQuery> for StoreFilter {
    fn from(query: StoreQuery) -> Self {
        Self {
            chain_ids: query.chain_id.map(|id| vec![id]),
            city: query.city,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChainResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub chain_id: i64,
}

impl From<Chain> for ChainResponse {
    fn from(chain: Chain) -> Self {
        Self {
            id: chain.id,
            name: chain.name,
        }
    }
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
            city: store.city,
            chain_id: store.chain_id,
        }
    }
}
