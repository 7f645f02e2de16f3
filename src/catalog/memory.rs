//! Fixture-backed catalog, immutable after construction.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    catalog::{fixtures::CatalogData, CatalogError, CatalogStore},
    models::{store::contains_ignore_case, Chain, PriceRecord, Product, Store, StoreFilter},
};

#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    chains: Vec<Chain>,
    stores: Vec<Store>,
    products: Vec<Product>,
    latest_prices: HashMap<(i64, i64), PriceRecord>,
}

impl InMemoryCatalog {
    /// Validates `data` and indexes the most recent price per (store, product).
    ///
    /// Among records with the same `effective_at` the one listed last wins,
    /// whatever their ids.
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        let CatalogData {
            mut chains,
            mut stores,
            mut products,
            prices,
        } = data;

        let chain_ids = unique_ids("chain", chains.iter().map(|c| c.id))?;
        let store_ids = unique_ids("store", stores.iter().map(|s| s.id))?;
        let product_ids = unique_ids("product", products.iter().map(|p| p.id))?;

        if let Some(store) = stores.iter().find(|s| !chain_ids.contains(&s.chain_id)) {
            return Err(CatalogError::FixtureIntegrity(format!(
                "store {} references unknown chain {}",
                store.id, store.chain_id
            )));
        }

        let mut latest_prices: HashMap<(i64, i64), PriceRecord> = HashMap::new();

        for record in prices {
            if !store_ids.contains(&record.store_id) || !product_ids.contains(&record.product_id) {
                return Err(CatalogError::FixtureIntegrity(format!(
                    "price for store {} / product {} references an unknown store or product",
                    record.store_id, record.product_id
                )));
            }

            if record.price < Decimal::ZERO {
                return Err(CatalogError::FixtureIntegrity(format!(
                    "negative price {} for store {} / product {}",
                    record.price, record.store_id, record.product_id
                )));
            }

            let key = (record.store_id, record.product_id);
            match latest_prices.get(&key) {
                Some(current) if current.effective_at > record.effective_at => {}
                _ => {
                    latest_prices.insert(key, record);
                }
            }
        }

        chains.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        stores.sort_by(|a, b| {
            a.city
                .cmp(&b.city)
                .then_with(|| a.name.cmp(&b.name))
                .then(a.id.cmp(&b.id))
        });
        products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(Self {
            chains,
            stores,
            products,
            latest_prices,
        })
    }

    pub fn demo() -> Result<Self, CatalogError> {
        Self::new(CatalogData::demo()?)
    }
}

fn unique_ids(kind: &str, ids: impl Iterator<Item = i64>) -> Result<HashSet<i64>, CatalogError> {
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::FixtureIntegrity(format!(
                "duplicate {kind} id {id}"
            )));
        }
    }

    Ok(seen)
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_chains(&self) -> Result<Vec<Chain>, CatalogError> {
        Ok(self.chains.clone())
    }

    async fn list_stores(&self, filter: &StoreFilter) -> Result<Vec<Store>, CatalogError> {
        Ok(self
            .stores
            .iter()
            .filter(|store| filter.matches(store))
            .cloned()
            .collect())
    }

    async fn search_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Product>, CatalogError> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .products
            .iter()
            .filter(|product| contains_ignore_case(&product.name, query))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn latest_price(
        &self,
        store_id: i64,
        product_id: i64,
    ) -> Result<Option<PriceRecord>, CatalogError> {
        Ok(self.latest_prices.get(&(store_id, product_id)).cloned())
    }
}
