//! # drive-api
//!
//! Axum HTTP boundary for Meridian Drive: route definitions, handlers,
//! DTOs, and the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
