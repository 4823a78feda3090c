pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;
