//! # drive-database
//!
//! PostgreSQL connection pool management and concrete repository
//! implementations for the drive record tables.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
