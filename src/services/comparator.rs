//! Basket comparison: price a basket in every candidate store and rank the stores.

use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    catalog::{CatalogError, CatalogStore},
    models::{BasketItem, Chain, StoreFilter, StoreResult, CURRENCY},
};

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("basket is empty")]
    InvalidBasket,

    #[error("quantity for product {product_id} must be greater than 0, got {quantity}")]
    InvalidQuantity { product_id: i64, quantity: i32 },

    #[error("no stores match the requested filters")]
    NoMatchingStores,

    #[error("basket total for store {store_id} is too large to compute")]
    TotalOverflow { store_id: i64 },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub fn validate_basket(items: &[BasketItem]) -> Result<(), CompareError> {
    if items.is_empty() {
        return Err(CompareError::InvalidBasket);
    }

    if let Some(item) = items.iter().find(|item| item.quantity <= 0) {
        return Err(CompareError::InvalidQuantity {
            product_id: item.product_id,
            quantity: item.quantity,
        });
    }

    Ok(())
}

/// Prices `items` in every store passing `filter` and returns the fully covered
/// stores, cheapest first.
///
/// A store missing a price for any item is left out entirely; partial baskets are
/// never priced. Equal totals are ordered by store id.
///
/// # Errors
///
/// [`CompareError::InvalidBasket`] / [`CompareError::InvalidQuantity`] before any
/// lookup, [`CompareError::NoMatchingStores`] when the filters leave no store, and
/// [`CompareError::Catalog`] when the catalog cannot be read.
#[instrument(skip(catalog, items), fields(items = items.len()))]
pub async fn compare(
    catalog: &dyn CatalogStore,
    items: &[BasketItem],
    filter: &StoreFilter,
) -> Result<Vec<StoreResult>, CompareError> {
    validate_basket(items)?;

    let stores = catalog.list_stores(filter).await?;
    if stores.is_empty() {
        return Err(CompareError::NoMatchingStores);
    }

    let chains: HashMap<i64, Chain> = catalog
        .list_chains()
        .await?
        .into_iter()
        .map(|chain| (chain.id, chain))
        .collect();

    let candidates = stores.len();
    let mut results = Vec::with_capacity(candidates);

    for store in stores {
        let Some(total_price) = basket_total(catalog, store.id, items).await? else {
            debug!(store_id = store.id, "store skipped, basket not fully priced");
            continue;
        };

        let Some(chain) = chains.get(&store.chain_id).cloned() else {
            warn!(store_id = store.id, chain_id = store.chain_id, "store skipped, unknown chain");
            continue;
        };

        results.push(StoreResult {
            store,
            chain,
            total_price,
            currency: CURRENCY,
        });
    }

    rank(&mut results);

    debug!(candidates, priced = results.len(), "basket compared");

    Ok(results)
}

/// Σ price × quantity for one store, or `None` as soon as an item has no price.
async fn basket_total(
    catalog: &dyn CatalogStore,
    store_id: i64,
    items: &[BasketItem],
) -> Result<Option<Decimal>, CompareError> {
    let mut total = Decimal::ZERO;

    for item in items {
        let Some(record) = catalog.latest_price(store_id, item.product_id).await? else {
            return Ok(None);
        };

        total = record
            .price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|line| total.checked_add(line))
            .ok_or(CompareError::TotalOverflow { store_id })?;
    }

    Ok(Some(total))
}

/// Cheapest first; store id breaks ties.
pub fn rank(results: &mut [StoreResult]) {
    results.sort_by(|a, b| {
        a.total_price
            .cmp(&b.total_price)
            .then(a.store.id.cmp(&b.store.id))
    });
}
