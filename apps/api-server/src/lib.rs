//! # Quill API Server
//!
//! Actix-web HTTP surface over the post store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

pub use config::{AppConfig, CorsOrigins};
pub use state::AppState;
