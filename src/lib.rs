//! Storefront demo service: catalog, cart, checkout, order tracking and
//! admin inventory over in-memory state.

pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
