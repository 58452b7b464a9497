//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// Many-to-one with Service. A category whose service has been deleted
/// is an orphan: it is filtered out of selection paths but not removed
/// by the client (the backend owns deletion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Service reference (required)
    pub service_id: i64,
    pub name: String,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub service_id: i64,
    pub name: String,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub service_id: Option<i64>,
    pub name: Option<String>,
}
