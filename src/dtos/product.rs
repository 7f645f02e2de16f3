// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
pub const MAX_SEARCH_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ProductSearchQuery {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

/// A search request that passed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearch {
    pub query: String,
    pub limit: u32,
}

impl ProductSearchQuery {
    pub fn validate(self) -> Result<ProductSearch, AppError> {
        let query = self.q.unwrap_or_default();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(AppError::validation(format!(
                "Search query must be at least {MIN_QUERY_CHARS} characters"
            )));
        }

        let limit = self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let limit = u32::try_from(limit)
            .ok()
            .filter(|l| (1..=MAX_SEARCH_LIMIT).contains(&i64::from(*l)))
            .ok_or_else(|| {
                AppError::validation(format!("Limit must be between 1 and {MAX_SEARCH_LIMIT}"))
            })?;

        Ok(ProductSearch { query, limit })
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub quantity: Option<String>,
    pub category: Option<String>,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            brand: product.brand,
            quantity: product.quantity,
            category: product.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: Option<&str>, limit: Option<i64>) -> ProductSearchQuery {
        ProductSearchQuery {
            q: q.map(str::to_string),
            limit,
        }
    }

    #[test]
    fn defaults_limit_to_twenty() {
        let search = query(Some("mi"), None).validate().expect("should be valid");

        assert_eq!(
            search,
            ProductSearch {
                query: "mi".to_string(),
                limit: 20
            }
        );
    }

    #[test]
    fn rejects_short_or_missing_query() {
        for q in [None, Some(""), Some("m")] {
            let result = query(q, None).validate();
            assert!(
                matches!(result, Err(AppError::ValidationError(_))),
                "expected ValidationError for {q:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Two Hebrew letters, four bytes.
        assert!(query(Some("חל"), None).validate().is_ok());
        assert!(query(Some("ח"), None).validate().is_err());
    }

    #[test]
    fn rejects_limit_out_of_range() {
        for limit in [0, -5, 101] {
            let result = query(Some("milk"), Some(limit)).validate();
            assert!(
                matches!(result, Err(AppError::ValidationError(_))),
                "expected ValidationError for limit {limit}, got {result:?}"
            );
        }

        assert!(query(Some("milk"), Some(1)).validate().is_ok());
        assert!(query(Some("milk"), Some(100)).validate().is_ok());
    }
}
