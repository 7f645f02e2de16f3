//! Supermarket basket comparison service.
//!
//! Prices a basket of products in every store of the selected chains and cities
//! and ranks the stores from cheapest to most expensive.

pub mod catalog;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
