//! Filter & Sort Engine
//!
//! Orthogonal filters (dietary type, tag, price sort) applied to the
//! items of one (category, subcategory) scope. Pure computation over
//! already-resident data: same catalog and same inputs always produce
//! the same ordered output.

use crate::store::CatalogStore;
use shared::models::{DietaryType, Item};

/// Dietary filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietaryFilter {
    #[default]
    All,
    Only(DietaryType),
}

/// Tag filter state (tags referenced by id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tagged(i64),
}

/// Price sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    #[default]
    Asc,
    Desc,
}

/// The three orthogonal filters
///
/// Independent of the hierarchy cursor: resetting filters never moves
/// the cascading selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub dietary: DietaryFilter,
    pub tag: TagFilter,
    pub price_sort: PriceSort,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore all three filters to their defaults (all / all / asc)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The ordered, filtered item list for one (category, subcategory) scope
///
/// Narrows by exact `category_id` first (store index), then applies:
/// - exact `sub_category_id` match; `None` matches only items with no
///   subcategory, it is not a wildcard
/// - dietary predicate (`All` passes everything)
/// - tag predicate (`All` passes everything)
///
/// Unavailable items are excluded. The surviving set is stable-sorted
/// by price; equal-price items keep catalog order in both directions.
pub fn filtered_items<'a>(
    store: &'a CatalogStore,
    category_id: i64,
    sub_category_id: Option<i64>,
    state: &FilterState,
) -> Vec<&'a Item> {
    let mut items: Vec<&Item> = store
        .items_in(category_id)
        .into_iter()
        .filter(|item| item.is_available)
        .filter(|item| item.sub_category_id == sub_category_id)
        .filter(|item| matches_dietary(item, state.dietary))
        .filter(|item| matches_tag(item, state.tag))
        .collect();

    // Vec::sort_by is stable: equal prices keep catalog order
    match state.price_sort {
        PriceSort::Asc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        PriceSort::Desc => items.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    items
}

/// Whether the dietary selector applies to a category
///
/// True iff at least one item in the category (all subcategories
/// included) is a food item. Gates whether the UI may set the dietary
/// filter to anything but `All`.
pub fn dietary_filter_applicable(store: &CatalogStore, category_id: i64) -> bool {
    store.items_in(category_id).iter().any(|i| i.is_food_item)
}

fn matches_dietary(item: &Item, filter: DietaryFilter) -> bool {
    match filter {
        DietaryFilter::All => true,
        // dietary_type is only meaningful on food items
        DietaryFilter::Only(wanted) => item.is_food_item && item.dietary_type == Some(wanted),
    }
}

fn matches_tag(item: &Item, filter: TagFilter) -> bool {
    match filter {
        TagFilter::All => true,
        TagFilter::Tagged(tag_id) => item.tag_ids.contains(&tag_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{food_item, item};

    /// Breakfast (category 10, no subcategories): A and B attach directly
    fn breakfast_store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace_items(vec![
            item(1, 10, None, "Pancakes", "120"),
            item(2, 10, None, "Porridge", "80"),
        ]);
        store
    }

    #[test]
    fn test_empty_subcategory_scope() {
        // Category without subcategories: None scope returns its items,
        // ordered by price, without requiring a subcategory id
        let store = breakfast_store();
        let state = FilterState::new();

        let result = filtered_items(&store, 10, None, &state);
        let ids: Vec<i64> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]); // 80 before 120
    }

    #[test]
    fn test_null_subcategory_is_strict_not_wildcard() {
        let mut store = CatalogStore::new();
        store.replace_items(vec![
            item(1, 10, None, "Pancakes", "120"),
            item(2, 10, Some(100), "Dosa", "60"),
        ]);
        let state = FilterState::new();

        let direct: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(direct, vec![1]);

        let scoped: Vec<i64> = filtered_items(&store, 10, Some(100), &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(scoped, vec![2]);
    }

    #[test]
    fn test_category_scope_is_exact() {
        let store = breakfast_store();
        let state = FilterState::new();
        assert!(filtered_items(&store, 11, None, &state).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let store = breakfast_store();
        let state = FilterState::new();

        let first: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        let second: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_price_sort_stability() {
        // A(10, idx 0), B(10, idx 1), C(5, idx 2): equal prices keep
        // catalog order in BOTH directions
        let mut store = CatalogStore::new();
        store.replace_items(vec![
            item(1, 10, None, "A", "10"),
            item(2, 10, None, "B", "10"),
            item(3, 10, None, "C", "5"),
        ]);

        let mut state = FilterState::new();
        let asc: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(asc, vec![3, 1, 2]);

        state.price_sort = PriceSort::Desc;
        let desc: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(desc, vec![1, 2, 3]);
    }

    #[test]
    fn test_dietary_filter() {
        use shared::models::DietaryType;

        let mut store = CatalogStore::new();
        store.replace_items(vec![
            food_item(1, 10, None, "Paneer Tikka", "220", DietaryType::Veg),
            food_item(2, 10, None, "Chicken Tikka", "280", DietaryType::NonVeg),
            item(3, 10, None, "Bottled Water", "20"),
        ]);

        let state = FilterState {
            dietary: DietaryFilter::Only(DietaryType::Veg),
            ..Default::default()
        };
        let ids: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_tag_filter_exclusivity() {
        // A tagged {Spicy, Bestseller}, B tagged {Bestseller}
        let mut store = CatalogStore::new();
        let mut a = item(1, 10, None, "Chilli Paneer", "200");
        a.tag_ids = vec![1, 2];
        let mut b = item(2, 10, None, "Spring Rolls", "150");
        b.tag_ids = vec![2];
        store.replace_items(vec![a, b]);

        let state = FilterState {
            tag: TagFilter::Tagged(1),
            ..Default::default()
        };
        let ids: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_unavailable_items_excluded() {
        let mut store = CatalogStore::new();
        let mut sold_out = item(1, 10, None, "Pancakes", "120");
        sold_out.is_available = false;
        store.replace_items(vec![sold_out, item(2, 10, None, "Porridge", "80")]);

        let state = FilterState::new();
        let ids: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_dietary_visibility_gating() {
        use shared::models::DietaryType;

        let mut store = CatalogStore::new();
        store.replace_items(vec![
            item(1, 10, None, "Bath Towel", "0"),
            food_item(2, 11, None, "Omelette", "90", DietaryType::Egg),
        ]);

        // No food item in category 10, whatever the global filter says
        assert!(!dietary_filter_applicable(&store, 10));
        assert!(dietary_filter_applicable(&store, 11));
        assert!(!dietary_filter_applicable(&store, 99));
    }

    #[test]
    fn test_reset_restores_defaults() {
        use shared::models::DietaryType;

        let mut state = FilterState {
            dietary: DietaryFilter::Only(DietaryType::Veg),
            tag: TagFilter::Tagged(7),
            price_sort: PriceSort::Desc,
        };
        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_filters_compose() {
        use shared::models::DietaryType;

        let mut store = CatalogStore::new();
        let mut veg_spicy = food_item(1, 10, None, "Chilli Paneer", "200", DietaryType::Veg);
        veg_spicy.tag_ids = vec![1];
        let veg_plain = food_item(2, 10, None, "Dal", "140", DietaryType::Veg);
        let mut nonveg_spicy = food_item(3, 10, None, "Chicken 65", "260", DietaryType::NonVeg);
        nonveg_spicy.tag_ids = vec![1];
        store.replace_items(vec![veg_spicy, veg_plain, nonveg_spicy]);

        let state = FilterState {
            dietary: DietaryFilter::Only(DietaryType::Veg),
            tag: TagFilter::Tagged(1),
            price_sort: PriceSort::Asc,
        };
        let ids: Vec<i64> = filtered_items(&store, 10, None, &state)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }
}
