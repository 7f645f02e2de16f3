pub mod basket;
pub mod chain;
pub mod price;
pub mod product;
pub mod store;

pub use basket::{BasketItem, StoreResult, CURRENCY};
pub use chain::Chain;
pub use price::PriceRecord;
pub use product::Product;
pub use store::{Store, StoreFilter};
