use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct Chain {
    pub id: i64,
    pub name: String,
    /// Identifier of the chain in the government price-transparency feed.
    #[serde(default)]
    pub gov_chain_id: String,
}
