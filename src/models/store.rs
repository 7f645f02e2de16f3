use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct Store {
    pub id: i64,
    pub chain_id: i64,
    pub name: String,
    pub city: Option<String>,
}

/// Conjunctive store filters. `None`, an empty id list and a blank city all mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFilter {
    pub chain_ids: Option<Vec<i64>>,
    pub city: Option<String>,
}

impl StoreFilter {
    pub fn chain_ids(&self) -> Option<&[i64]> {
        self.chain_ids.as_deref().filter(|ids| !ids.is_empty())
    }

    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    /// In-memory evaluation of the filter; the Postgres catalog does the same in SQL.
    pub fn matches(&self, store: &Store) -> bool {
        if let Some(ids) = self.chain_ids() {
            if !ids.contains(&store.chain_id) {
                return false;
            }
        }

        match (self.city(), store.city.as_deref()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(needle), Some(city)) => contains_ignore_case(city, needle),
        }
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
