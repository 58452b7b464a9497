//! Test entity constructors shared by the engine test modules

use rust_decimal::Decimal;
use shared::models::{
    Addon, AddonOption, Category, DietaryType, Item, SelectionMode, Service, SubCategory, Tag,
};

pub fn dec(value: &str) -> Decimal {
    value.parse().expect("valid decimal literal")
}

pub fn service(id: i64, name: &str) -> Service {
    Service {
        id,
        name: name.to_string(),
        is_food: true,
        is_active: true,
    }
}

pub fn category(id: i64, service_id: i64, name: &str) -> Category {
    Category {
        id,
        service_id,
        name: name.to_string(),
    }
}

pub fn sub_category(id: i64, category_id: i64, name: &str) -> SubCategory {
    SubCategory {
        id,
        category_id,
        name: name.to_string(),
    }
}

pub fn tag(id: i64, name: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        description: None,
    }
}

/// Baseline non-food item; tests mutate fields as needed
pub fn item(id: i64, category_id: i64, sub_category_id: Option<i64>, name: &str, price: &str) -> Item {
    Item {
        id,
        service_id: 1,
        category_id,
        sub_category_id,
        name: name.to_string(),
        description: None,
        image_path: None,
        price: dec(price),
        price_per_unit: "plate".to_string(),
        is_food_item: false,
        dietary_type: None,
        calories: None,
        portion_size: None,
        tag_ids: Vec::new(),
        is_available: true,
        has_addons: false,
        addon_ids: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

/// Food item with a dietary type
pub fn food_item(
    id: i64,
    category_id: i64,
    sub_category_id: Option<i64>,
    name: &str,
    price: &str,
    dietary: DietaryType,
) -> Item {
    let mut it = item(id, category_id, sub_category_id, name, price);
    it.is_food_item = true;
    it.dietary_type = Some(dietary);
    it
}

/// Multi-select add-on with the Cheese/Olives option pair
pub fn addon(id: i64, name: &str) -> Addon {
    Addon {
        id,
        name: name.to_string(),
        description: None,
        selection_mode: SelectionMode::Multi,
        options: vec![
            AddonOption {
                name: "Cheese".to_string(),
                unit_price: dec("20"),
                unit_label: "slice".to_string(),
            },
            AddonOption {
                name: "Olives".to_string(),
                unit_price: dec("15"),
                unit_label: "portion".to_string(),
            },
        ],
        created_at: None,
        updated_at: None,
    }
}

/// Single-select variant of [`addon`]
pub fn single_addon(id: i64, name: &str) -> Addon {
    let mut a = addon(id, name);
    a.selection_mode = SelectionMode::Single;
    a
}
