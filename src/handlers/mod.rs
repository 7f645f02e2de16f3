pub mod basket;
pub mod catalog;
pub mod health;
pub mod product;
