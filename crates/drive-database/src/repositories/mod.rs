//! Concrete repository implementations, one per record table.

pub mod file;
pub mod folder;
