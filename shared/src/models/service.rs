//! Service Model

use serde::{Deserialize, Serialize};

/// Service entity - root of the catalog hierarchy
///
/// A service is a top-level offering a hotel exposes to guests
/// (e.g., "Room Service", "Spa"). Inactive services stay in the
/// catalog but are excluded from active browsing paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    /// Whether this service offers food items (enables dietary filtering)
    pub is_food: bool,
    pub is_active: bool,
}

/// Create service payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    pub is_food: Option<bool>,
}

/// Update service payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceUpdate {
    pub name: Option<String>,
    pub is_food: Option<bool>,
    pub is_active: Option<bool>,
}
