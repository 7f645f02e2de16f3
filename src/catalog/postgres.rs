//! Postgres-backed catalog over the `chains`, `stores`, `products`,
//! `store_products` and `prices` tables.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use crate::{
    catalog::{CatalogError, CatalogStore},
    models::{Chain, PriceRecord, Product, Store, StoreFilter},
};

const LIST_CHAINS_SQL: &str = "SELECT id, name, gov_chain_id FROM chains ORDER BY name, id";

const SEARCH_PRODUCTS_SQL: &str = r"SELECT id, name, brand, quantity, category
    FROM products
    WHERE name ILIKE $1 ESCAPE '\'
    ORDER BY name, id
    LIMIT $2";

const LATEST_PRICE_SQL: &str = r"SELECT p.id, sp.store_id, sp.product_id,
        p.price_nis AS price, p.effective_at
    FROM prices p
    JOIN store_products sp ON sp.id = p.store_product_id
    WHERE sp.store_id = $1 AND sp.product_id = $2
    ORDER BY p.effective_at DESC, p.id DESC
    LIMIT 1";

#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wraps user text in `%…%` for ILIKE, escaping the LIKE metacharacters.
pub(crate) fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

pub(crate) fn list_stores_query(filter: &StoreFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT id, chain_id, name, city FROM stores WHERE TRUE");

    if let Some(ids) = filter.chain_ids() {
        builder.push(" AND chain_id = ANY(");
        builder.push_bind(ids.to_vec());
        builder.push(")");
    }

    if let Some(city) = filter.city() {
        builder.push(" AND city ILIKE ");
        builder.push_bind(contains_pattern(city));
        builder.push(r" ESCAPE '\'");
    }

    builder.push(" ORDER BY city NULLS FIRST, name, id");
    builder
}

#[async_trait]
impl CatalogStore for PgCatalog {
    #[instrument(skip(self))]
    async fn list_chains(&self) -> Result<Vec<Chain>, CatalogError> {
        let chains = sqlx::query_as::<_, Chain>(LIST_CHAINS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(chains)
    }

    #[instrument(skip(self))]
    async fn list_stores(&self, filter: &StoreFilter) -> Result<Vec<Store>, CatalogError> {
        let mut builder = list_stores_query(filter);

        let stores = builder
            .build_query_as::<Store>()
            .fetch_all(&self.pool)
            .await?;

        Ok(stores)
    }

    #[instrument(skip(self))]
    async fn search_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Product>, CatalogError> {
        let products = sqlx::query_as::<_, Product>(SEARCH_PRODUCTS_SQL)
            .bind(contains_pattern(query))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn latest_price(
        &self,
        store_id: i64,
        product_id: i64,
    ) -> Result<Option<PriceRecord>, CatalogError> {
        let price = sqlx::query_as::<_, PriceRecord>(LATEST_PRICE_SQL)
            .bind(store_id)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(price)
    }
}
