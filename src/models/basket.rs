use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Chain, Store};

/// All prices are shekels; there is no currency conversion.
pub const CURRENCY: &str = "ILS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    pub product_id: i64,
    pub quantity: i32,
}

/// Price of a whole basket in one fully covering store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResult {
    pub store: Store,
    pub chain: Chain,
    pub total_price: Decimal,
    pub currency: &'static str,
}
