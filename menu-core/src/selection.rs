//! Cascading Selection Controller
//!
//! Tracks the guest's position in the hierarchy as a single cursor
//! (active service, active category index, active subcategory) and
//! enforces descendant-reset-on-ancestor-change: there is no path that
//! changes the category without recomputing the subcategory.
//!
//! The controller never holds references into the store; every
//! operation takes the store so it can be positioned against whatever
//! has loaded so far.

use crate::store::{CatalogStore, ResourceFamily};
use shared::error::{AppError, AppResult, ErrorCode};

/// Direction for cycling through a service's categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Hierarchy cursor
///
/// `Uninitialized` until the catalog's service and category families
/// have loaded; `Positioned` afterwards. There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CascadingSelection {
    #[default]
    Uninitialized,
    Positioned {
        service_id: i64,
        /// Index into the active service's category list; may point at
        /// an empty slot when the service has no categories
        category_index: usize,
        sub_category_id: Option<i64>,
    },
}

impl CascadingSelection {
    pub fn new() -> Self {
        Self::Uninitialized
    }

    pub fn is_positioned(&self) -> bool {
        matches!(self, Self::Positioned { .. })
    }

    /// The active service id, if positioned
    pub fn active_service_id(&self) -> Option<i64> {
        match self {
            Self::Positioned { service_id, .. } => Some(*service_id),
            Self::Uninitialized => None,
        }
    }

    /// The active category index, if positioned
    pub fn active_category_index(&self) -> Option<usize> {
        match self {
            Self::Positioned { category_index, .. } => Some(*category_index),
            Self::Uninitialized => None,
        }
    }

    /// The active subcategory id, if positioned and one is selected
    pub fn active_sub_category_id(&self) -> Option<i64> {
        match self {
            Self::Positioned {
                sub_category_id, ..
            } => *sub_category_id,
            Self::Uninitialized => None,
        }
    }

    /// Resolve the active category against the store
    ///
    /// `None` when uninitialized or when the index points at an empty
    /// slot (service without categories) - consumers render an empty
    /// state, never an error.
    pub fn active_category<'a>(&self, store: &'a CatalogStore) -> Option<&'a shared::models::Category> {
        match self {
            Self::Positioned {
                service_id,
                category_index,
                ..
            } => store.categories_of(*service_id).get(*category_index).copied(),
            Self::Uninitialized => None,
        }
    }

    /// Position at the first active service's first category
    ///
    /// Degrades gracefully while the catalog is still arriving: until
    /// the service and category families are both loaded (and at least
    /// one active service exists) the cursor stays `Uninitialized` and
    /// `false` is returned. Idempotent once positioned.
    pub fn position(&mut self, store: &CatalogStore) -> bool {
        if self.is_positioned() {
            return true;
        }
        if !store.is_loaded(ResourceFamily::Services)
            || !store.is_loaded(ResourceFamily::Categories)
        {
            return false;
        }
        let Some(first) = store.active_services().first().copied() else {
            return false;
        };

        let sub_category_id = first_sub_category(store, first.id, 0);
        *self = Self::Positioned {
            service_id: first.id,
            category_index: 0,
            sub_category_id,
        };
        true
    }

    /// Switch to another active service, cascading the reset downward
    pub fn select_service(&mut self, store: &CatalogStore, service_id: i64) -> AppResult<()> {
        let service = store
            .service(service_id)
            .ok_or_else(|| AppError::new(ErrorCode::ServiceNotFound).with_detail("id", service_id))?;
        if !service.is_active {
            return Err(AppError::new(ErrorCode::ServiceInactive).with_detail("id", service_id));
        }

        *self = Self::Positioned {
            service_id,
            category_index: 0,
            sub_category_id: first_sub_category(store, service_id, 0),
        };
        Ok(())
    }

    /// Select a category by index within the active service
    ///
    /// The subcategory is always recomputed: the previous selection is
    /// kept only if it belongs to the new category's set, otherwise the
    /// new set's first subcategory (or none) becomes active.
    pub fn select_category(&mut self, store: &CatalogStore, index: usize) -> AppResult<()> {
        let Self::Positioned {
            service_id,
            category_index,
            sub_category_id,
        } = self
        else {
            return Err(AppError::catalog_not_loaded("categories"));
        };

        let categories = store.categories_of(*service_id);
        if index != 0 && index >= categories.len() {
            return Err(AppError::invalid_request(format!(
                "category index {} out of range for service {}",
                index, service_id
            )));
        }

        *category_index = index;
        *sub_category_id = retained_or_first(store, &categories, index, *sub_category_id);
        Ok(())
    }

    /// Cycle to the next/previous category, wrapping at the ends
    ///
    /// No-op when the active service has no categories. Applies the
    /// same subcategory-reset rule as [`select_category`].
    ///
    /// [`select_category`]: CascadingSelection::select_category
    pub fn advance_category(&mut self, store: &CatalogStore, direction: Direction) -> AppResult<()> {
        let Self::Positioned {
            service_id,
            category_index,
            ..
        } = self
        else {
            return Err(AppError::catalog_not_loaded("categories"));
        };

        let count = store.categories_of(*service_id).len();
        if count == 0 {
            return Ok(());
        }

        let current = *category_index;
        let next = match direction {
            Direction::Next => (current + 1) % count,
            Direction::Prev => (current + count - 1) % count,
        };
        self.select_category(store, next)
    }

    /// Select a subcategory of the active category directly
    ///
    /// The id must belong to the active category's subcategory set;
    /// foreign ids are rejected. The active category is not altered.
    pub fn select_sub_category(&mut self, store: &CatalogStore, id: i64) -> AppResult<()> {
        if !self.is_positioned() {
            return Err(AppError::catalog_not_loaded("sub_categories"));
        }

        let Some(active_id) = self.active_category(store).map(|c| c.id) else {
            return Err(AppError::new(ErrorCode::SubCategoryNotInCategory).with_detail("id", id));
        };
        let belongs = store.sub_categories_of(active_id).iter().any(|s| s.id == id);
        if !belongs {
            return Err(AppError::new(ErrorCode::SubCategoryNotInCategory)
                .with_detail("id", id)
                .with_detail("category_id", active_id));
        }

        if let Self::Positioned {
            sub_category_id, ..
        } = self
        {
            *sub_category_id = Some(id);
        }
        Ok(())
    }
}

/// First subcategory of the category at `index` for a service, if any
fn first_sub_category(store: &CatalogStore, service_id: i64, index: usize) -> Option<i64> {
    let categories = store.categories_of(service_id);
    let category = categories.get(index)?;
    store.sub_categories_of(category.id).first().map(|s| s.id)
}

/// Keep the previous subcategory if it belongs to the category at
/// `index`, otherwise fall to that category's first subcategory (or none)
fn retained_or_first(
    store: &CatalogStore,
    categories: &[&shared::models::Category],
    index: usize,
    previous: Option<i64>,
) -> Option<i64> {
    let Some(category) = categories.get(index) else {
        return None;
    };
    let subs = store.sub_categories_of(category.id);
    if let Some(prev) = previous
        && subs.iter().any(|s| s.id == prev)
    {
        return Some(prev);
    }
    subs.first().map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{category, service, sub_category};

    /// Two services: Room Service (Breakfast/Lunch with subcategories,
    /// Drinks without) and Spa (no categories)
    fn sample_store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace_services(vec![service(1, "Room Service"), service(2, "Spa")]);
        store.replace_categories(vec![
            category(10, 1, "Breakfast"),
            category(11, 1, "Lunch"),
            category(12, 1, "Drinks"),
        ]);
        store.replace_sub_categories(vec![
            sub_category(100, 10, "South Indian"),
            sub_category(101, 10, "Continental"),
            sub_category(110, 11, "Thali"),
        ]);
        store
    }

    #[test]
    fn test_position_before_load_stays_uninitialized() {
        let store = CatalogStore::new();
        let mut cursor = CascadingSelection::new();

        assert!(!cursor.position(&store));
        assert!(!cursor.is_positioned());
        assert!(cursor.active_category(&store).is_none());
    }

    #[test]
    fn test_position_with_partial_load_degrades() {
        // Services arrived, categories still in flight
        let mut store = CatalogStore::new();
        store.replace_services(vec![service(1, "Room Service")]);

        let mut cursor = CascadingSelection::new();
        assert!(!cursor.position(&store));
        assert!(!cursor.is_positioned());
    }

    #[test]
    fn test_position_lands_on_first_category_and_subcategory() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();

        assert!(cursor.position(&store));
        assert_eq!(cursor.active_service_id(), Some(1));
        assert_eq!(cursor.active_category_index(), Some(0));
        assert_eq!(cursor.active_sub_category_id(), Some(100));
    }

    #[test]
    fn test_position_is_idempotent() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);
        cursor.select_category(&store, 1).unwrap();

        // A late load-complete notification must not move the cursor
        assert!(cursor.position(&store));
        assert_eq!(cursor.active_category_index(), Some(1));
    }

    #[test]
    fn test_select_category_resets_foreign_subcategory() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        // Breakfast/Continental -> Lunch: Continental is foreign there
        cursor.select_sub_category(&store, 101).unwrap();
        cursor.select_category(&store, 1).unwrap();

        assert_eq!(cursor.active_sub_category_id(), Some(110));
    }

    #[test]
    fn test_select_category_without_subcategories_clears() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        cursor.select_category(&store, 2).unwrap();
        assert_eq!(cursor.active_sub_category_id(), None);
    }

    #[test]
    fn test_cascading_reset_invariant() {
        // After C1 -> C2 the subcategory always belongs to C2 (or none)
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        for first in 0..3 {
            for second in 0..3 {
                cursor.select_category(&store, first).unwrap();
                cursor.select_category(&store, second).unwrap();

                let active = cursor.active_category(&store).unwrap();
                match cursor.active_sub_category_id() {
                    Some(sub) => assert!(
                        store.sub_categories_of(active.id).iter().any(|s| s.id == sub),
                        "subcategory {} does not belong to category {}",
                        sub,
                        active.id
                    ),
                    None => assert!(store.sub_categories_of(active.id).is_empty()),
                }
            }
        }
    }

    #[test]
    fn test_advance_wraps_both_directions() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        cursor.advance_category(&store, Direction::Prev).unwrap();
        assert_eq!(cursor.active_category_index(), Some(2));

        cursor.advance_category(&store, Direction::Next).unwrap();
        assert_eq!(cursor.active_category_index(), Some(0));
    }

    #[test]
    fn test_advance_keeps_subcategory_on_single_category_wrap() {
        let mut store = CatalogStore::new();
        store.replace_services(vec![service(1, "Room Service")]);
        store.replace_categories(vec![category(10, 1, "Breakfast")]);
        store.replace_sub_categories(vec![
            sub_category(100, 10, "South Indian"),
            sub_category(101, 10, "Continental"),
        ]);

        let mut cursor = CascadingSelection::new();
        cursor.position(&store);
        cursor.select_sub_category(&store, 101).unwrap();

        // Wrapping back onto the same category keeps the selection
        cursor.advance_category(&store, Direction::Next).unwrap();
        assert_eq!(cursor.active_sub_category_id(), Some(101));
    }

    #[test]
    fn test_select_sub_category_rejects_foreign_id() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        // 110 belongs to Lunch, not Breakfast
        let err = cursor.select_sub_category(&store, 110).unwrap_err();
        assert_eq!(err.code, ErrorCode::SubCategoryNotInCategory);
        assert_eq!(cursor.active_sub_category_id(), Some(100));
    }

    #[test]
    fn test_service_without_categories_is_empty_slot() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        cursor.select_service(&store, 2).unwrap();
        assert_eq!(cursor.active_category_index(), Some(0));
        assert!(cursor.active_category(&store).is_none());
        assert_eq!(cursor.active_sub_category_id(), None);

        // Advancing is a no-op, not a crash
        cursor.advance_category(&store, Direction::Next).unwrap();
        assert_eq!(cursor.active_category_index(), Some(0));
    }

    #[test]
    fn test_select_inactive_service_rejected() {
        let mut store = sample_store();
        let mut closed = service(3, "Pool Bar");
        closed.is_active = false;
        store.replace_services(vec![service(1, "Room Service"), closed]);

        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        let err = cursor.select_service(&store, 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::ServiceInactive);
    }

    #[test]
    fn test_operations_before_position_are_reported() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();

        assert!(cursor.select_category(&store, 1).is_err());
        assert!(cursor.advance_category(&store, Direction::Next).is_err());
        assert!(cursor.select_sub_category(&store, 100).is_err());
    }

    #[test]
    fn test_select_category_out_of_range_rejected() {
        let store = sample_store();
        let mut cursor = CascadingSelection::new();
        cursor.position(&store);

        let err = cursor.select_category(&store, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(cursor.active_category_index(), Some(0));
    }
}
