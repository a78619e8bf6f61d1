//! Content service client and wire types

pub mod client;
pub mod types;

pub use client::{ApiError, ContentClient};
pub use types::QueryResponse;
