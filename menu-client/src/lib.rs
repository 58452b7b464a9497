//! Menu Client - HTTP client for the backend REST service
//!
//! Provides authenticated network calls for the catalog resource
//! families and the manager write operations, and implements
//! [`menu_core::CatalogBackend`] so the engine's loader can be fed
//! straight from the network.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::error::{ApiResponse, AppError, AppResult};
