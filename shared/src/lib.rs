//! Shared types for the hotel menu platform
//!
//! Common types used across multiple crates including entity models,
//! error types and the API response envelope.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
