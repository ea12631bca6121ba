//! HTTP handlers, one module per domain.

pub mod drive;
pub mod health;
