//! Tag Model

use serde::{Deserialize, Serialize};

/// Tag entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Create tag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update tag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
