//! Fixture data for the in-memory catalog.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    models::{Chain, PriceRecord, Product, Store},
};

const DEMO_CATALOG: &str = include_str!("../../fixtures/demo_catalog.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub chains: Vec<Chain>,
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub prices: Vec<PriceRecord>,
}

impl CatalogData {
    /// Built-in sample catalog: three chains, five stores, six products.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw)
    }
}
