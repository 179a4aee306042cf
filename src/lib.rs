// src/lib.rs

pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod store;

// Re-export specific items for convenience if needed
pub use routes::create_router;
