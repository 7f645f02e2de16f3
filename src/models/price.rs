use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::FromRow;

/// Shelf price of one product in one store from `effective_at` onwards, in ILS.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct PriceRecord {
    #[serde(default)]
    pub id: i64,
    pub store_id: i64,
    pub product_id: i64,
    pub price: Decimal,
    pub effective_at: DateTime<Utc>,
}
