//! Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dietary classification for food items
///
/// Only meaningful when `Item::is_food_item` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryType {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Egg,
}

impl DietaryType {
    /// Get the display label for this dietary type
    pub fn label(&self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
            Self::Egg => "Egg",
        }
    }
}

/// Item entity
///
/// A purchasable catalog entry. `category_id` is required; `sub_category_id`
/// is set only when the owning category has subcategories. Tags are
/// referenced by id, add-ons by an ordered id list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    /// Service reference (must own `category_id`)
    pub service_id: i64,
    /// Category reference (required)
    pub category_id: i64,
    /// Subcategory reference (None when items attach directly to the category)
    pub sub_category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    /// Unit price, non-negative
    pub price: Decimal,
    /// Display unit (e.g., "plate", "glass", "per portion")
    pub price_per_unit: String,
    pub is_food_item: bool,
    /// Meaningful only when `is_food_item` is true
    pub dietary_type: Option<DietaryType>,
    pub calories: Option<i32>,
    pub portion_size: Option<String>,
    /// Tag references (ids)
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    pub is_available: bool,
    /// True implies `addon_ids` is non-empty
    pub has_addons: bool,
    /// Add-on references (ids, display order)
    #[serde(default)]
    pub addon_ids: Vec<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub service_id: i64,
    pub category_id: i64,
    pub sub_category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub price: Decimal,
    pub price_per_unit: Option<String>,
    pub is_food_item: Option<bool>,
    pub dietary_type: Option<DietaryType>,
    pub calories: Option<i32>,
    pub portion_size: Option<String>,
    pub tag_ids: Option<Vec<i64>>,
    pub addon_ids: Option<Vec<i64>>,
}

/// Update item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub service_id: Option<i64>,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<Option<i64>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub price: Option<Decimal>,
    pub price_per_unit: Option<String>,
    pub is_food_item: Option<bool>,
    pub dietary_type: Option<Option<DietaryType>>,
    pub calories: Option<i32>,
    pub portion_size: Option<String>,
    pub tag_ids: Option<Vec<i64>>,
    pub addon_ids: Option<Vec<i64>>,
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dietary_type_serde() {
        assert_eq!(
            serde_json::to_string(&DietaryType::NonVeg).unwrap(),
            "\"Non-Veg\""
        );
        assert_eq!(
            serde_json::from_str::<DietaryType>("\"Veg\"").unwrap(),
            DietaryType::Veg
        );
    }

    #[test]
    fn test_item_optional_collections_default() {
        // Backend may omit empty tag/addon lists entirely
        let json = r#"{
            "id": 1,
            "service_id": 1,
            "category_id": 2,
            "sub_category_id": null,
            "name": "Masala Chai",
            "description": null,
            "image_path": null,
            "price": 3.5,
            "price_per_unit": "cup",
            "is_food_item": true,
            "dietary_type": "Veg",
            "calories": 120,
            "portion_size": null,
            "is_available": true,
            "has_addons": false,
            "created_at": null,
            "updated_at": null
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.tag_ids.is_empty());
        assert!(item.addon_ids.is_empty());
        assert_eq!(item.dietary_type, Some(DietaryType::Veg));
    }
}
