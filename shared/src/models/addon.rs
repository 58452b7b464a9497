//! Add-on Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selection mode for an add-on group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Exactly one option must be selected (radio)
    Single,
    /// Any number of options may be selected (checkbox)
    Multi,
}

/// Add-on option (embedded in Addon)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonOption {
    pub name: String,
    /// Price contribution when selected, non-negative
    pub unit_price: Decimal,
    /// Display unit (e.g., "slice", "portion")
    pub unit_label: String,
}

/// Add-on entity - a reusable priced option group
///
/// Reusable: multiple items may reference the same add-on id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Addon {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub selection_mode: SelectionMode,
    /// Embedded options (ordered, non-empty, names unique within group)
    pub options: Vec<AddonOption>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create add-on payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonCreate {
    pub name: String,
    pub description: Option<String>,
    pub selection_mode: SelectionMode,
    pub options: Vec<AddonOption>,
}

/// Update add-on payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub selection_mode: Option<SelectionMode>,
    pub options: Option<Vec<AddonOption>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_mode_serde() {
        assert_eq!(
            serde_json::to_string(&SelectionMode::Single).unwrap(),
            "\"single\""
        );
        assert_eq!(
            serde_json::from_str::<SelectionMode>("\"multi\"").unwrap(),
            SelectionMode::Multi
        );
    }

    #[test]
    fn test_addon_deserialize() {
        let json = r#"{
            "id": 7,
            "name": "Toppings",
            "description": null,
            "selection_mode": "multi",
            "options": [
                {"name": "Cheese", "unit_price": 20.0, "unit_label": "slice"},
                {"name": "Olives", "unit_price": 15.0, "unit_label": "portion"}
            ],
            "created_at": null,
            "updated_at": null
        }"#;
        let addon: Addon = serde_json::from_str(json).unwrap();
        assert_eq!(addon.selection_mode, SelectionMode::Multi);
        assert_eq!(addon.options.len(), 2);
        assert_eq!(addon.options[0].unit_price, Decimal::from(20));
    }
}
