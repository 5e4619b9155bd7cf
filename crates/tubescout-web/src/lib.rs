//! Axum HTTP server for TubeScout.
//!
//! This crate provides:
//! - The research page and JSON API routes
//! - Request logging, request IDs, security headers, CORS
//! - Configuration from environment variables

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
