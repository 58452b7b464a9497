//! SubCategory Model

use serde::{Deserialize, Serialize};

/// SubCategory entity
///
/// Optional layer between category and item. A category may have zero
/// subcategories, in which case its items carry `sub_category_id = None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: i64,
    /// Category reference (required)
    pub category_id: i64,
    pub name: String,
}

/// Create subcategory payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategoryCreate {
    pub category_id: i64,
    pub name: String,
}

/// Update subcategory payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategoryUpdate {
    pub category_id: Option<i64>,
    pub name: Option<String>,
}
