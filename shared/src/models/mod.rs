//! Data models
//!
//! Shared between the catalog engine and the client crates (via API).
//! All IDs are `i64` (backend-issued). Money uses `rust_decimal::Decimal`.

pub mod addon;
pub mod category;
pub mod item;
pub mod service;
pub mod subcategory;
pub mod tag;

// Re-exports
pub use addon::*;
pub use category::*;
pub use item::*;
pub use service::*;
pub use subcategory::*;
pub use tag::*;
