//! warpgen — free Cloudflare WARP config generator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod api;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod env;
pub mod generate;
pub mod identity;
pub mod models;
pub mod output;
