//! Shared types used across layers.

pub mod pagination;

pub use pagination::PaginationParams;
