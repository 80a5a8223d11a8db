//! Contents admin library.
//!
//! Builds the filter box of the admin contents list and serves it over
//! HTTP. The `contents-admin` binary wires this up from configuration.

pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod models;
pub mod permissions;
pub mod routes;
pub mod services;
pub mod state;
pub mod theme;

pub use config::Config;
pub use state::AppState;
