//! Read-only access to chains, stores, products and prices.
//!
//! The comparator only sees [`CatalogStore`], so the fixture-backed and the
//! Postgres-backed catalogs are interchangeable.

pub mod errors;
pub mod fixtures;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    config::CatalogSource,
    database,
    models::{Chain, PriceRecord, Product, Store, StoreFilter},
};

pub use errors::CatalogError;
pub use memory::InMemoryCatalog;
pub use postgres::PgCatalog;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All chains, ordered by name.
    async fn list_chains(&self) -> Result<Vec<Chain>, CatalogError>;

    /// Stores passing `filter`, ordered by city then name.
    async fn list_stores(&self, filter: &StoreFilter) -> Result<Vec<Store>, CatalogError>;

    /// Products whose name contains `query` (case-insensitive), ordered by name,
    /// at most `limit` of them.
    async fn search_products(&self, query: &str, limit: u32)
        -> Result<Vec<Product>, CatalogError>;

    /// The authoritative price of `product_id` in `store_id`, if the store has one.
    async fn latest_price(
        &self,
        store_id: i64,
        product_id: i64,
    ) -> Result<Option<PriceRecord>, CatalogError>;
}

/// Builds the catalog described by `source`.
pub async fn open(source: &CatalogSource) -> Result<Arc<dyn CatalogStore>, CatalogError> {
    match source {
        CatalogSource::Postgres {
            database_url,
            max_connections,
            run_migrations,
        } => {
            info!("Connecting to database...");
            let pool = database::create_pool(database_url, *max_connections).await?;

            if *run_migrations {
                info!("Running migrations...");
                database::run_migrations(&pool).await?;
            }

            Ok(Arc::new(PgCatalog::new(pool)))
        }
        CatalogSource::Memory { fixtures: fixture_path } => {
            let data = match fixture_path {
                Some(path) => {
                    info!(path = %path.display(), "Loading catalog fixtures");
                    fixtures::CatalogData::from_path(path)?
                }
                None => {
                    info!("Using built-in demo catalog");
                    fixtures::CatalogData::demo()?
                }
            };

            Ok(Arc::new(InMemoryCatalog::new(data)?))
        }
    }
}
