//! Catalog Store
//!
//! In-memory mirror of the backend catalog: services, categories,
//! subcategories, items, tags and add-ons, each with a per-family
//! "loaded" flag so consumers can tell "not loaded" from "loaded but
//! empty". Collections are replaced wholesale on load; there is no
//! incremental merge. The store is the single shared mutable structure
//! of the engine - all mutation goes through it.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Addon, Category, Item, Service, SubCategory, Tag};
use std::collections::{HashMap, HashSet};

/// Resource families the backend exposes as independent list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFamily {
    Services,
    Categories,
    SubCategories,
    Items,
    Tags,
    Addons,
}

impl ResourceFamily {
    /// All families, in load order
    pub const ALL: [ResourceFamily; 6] = [
        ResourceFamily::Services,
        ResourceFamily::Categories,
        ResourceFamily::SubCategories,
        ResourceFamily::Items,
        ResourceFamily::Tags,
        ResourceFamily::Addons,
    ];

    /// Get the string name for this family
    pub fn name(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Categories => "categories",
            Self::SubCategories => "sub_categories",
            Self::Items => "items",
            Self::Tags => "tags",
            Self::Addons => "addons",
        }
    }

    /// Dense index used for per-family bookkeeping
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Services => 0,
            Self::Categories => 1,
            Self::SubCategories => 2,
            Self::Items => 3,
            Self::Tags => 4,
            Self::Addons => 5,
        }
    }
}

/// In-memory catalog mirror with per-family loaded flags
///
/// Lookups are O(1) via id indexes; hierarchy reads preserve catalog
/// order (the order the backend returned the lists in). A failed fetch
/// never reaches the store: prior data stays intact and the family's
/// loaded flag stays false.
#[derive(Debug, Default)]
pub struct CatalogStore {
    services: Vec<Service>,
    categories: Vec<Category>,
    sub_categories: Vec<SubCategory>,
    items: Vec<Item>,
    tags: Vec<Tag>,
    addons: Vec<Addon>,

    service_idx: HashMap<i64, usize>,
    category_idx: HashMap<i64, usize>,
    sub_category_idx: HashMap<i64, usize>,
    item_idx: HashMap<i64, usize>,
    tag_idx: HashMap<i64, usize>,
    addon_idx: HashMap<i64, usize>,

    /// category_id -> item positions, catalog order
    items_by_category: HashMap<i64, Vec<usize>>,

    loaded: HashSet<ResourceFamily>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a family has completed at least one successful load
    pub fn is_loaded(&self, family: ResourceFamily) -> bool {
        self.loaded.contains(&family)
    }

    // ==================== Wholesale replacement ====================

    /// Replace the service collection and mark the family loaded
    pub fn replace_services(&mut self, services: Vec<Service>) {
        self.services = services;
        self.service_idx = index_by_id(&self.services, |s| s.id);
        self.loaded.insert(ResourceFamily::Services);
    }

    /// Replace the category collection and mark the family loaded
    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.category_idx = index_by_id(&self.categories, |c| c.id);
        self.loaded.insert(ResourceFamily::Categories);
    }

    /// Replace the subcategory collection and mark the family loaded
    pub fn replace_sub_categories(&mut self, sub_categories: Vec<SubCategory>) {
        self.sub_categories = sub_categories;
        self.sub_category_idx = index_by_id(&self.sub_categories, |s| s.id);
        self.loaded.insert(ResourceFamily::SubCategories);
    }

    /// Replace the item collection, rebuild the category index and mark
    /// the family loaded
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.reindex_items();
        self.loaded.insert(ResourceFamily::Items);
    }

    /// Replace the tag collection and mark the family loaded
    pub fn replace_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
        self.tag_idx = index_by_id(&self.tags, |t| t.id);
        self.loaded.insert(ResourceFamily::Tags);
    }

    /// Replace the add-on collection and mark the family loaded
    pub fn replace_addons(&mut self, addons: Vec<Addon>) {
        self.addons = addons;
        self.addon_idx = index_by_id(&self.addons, |a| a.id);
        self.loaded.insert(ResourceFamily::Addons);
    }

    // ==================== Lookups ====================

    pub fn service(&self, id: i64) -> Option<&Service> {
        self.service_idx.get(&id).map(|&i| &self.services[i])
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.category_idx.get(&id).map(|&i| &self.categories[i])
    }

    pub fn sub_category(&self, id: i64) -> Option<&SubCategory> {
        self.sub_category_idx
            .get(&id)
            .map(|&i| &self.sub_categories[i])
    }

    pub fn item(&self, id: i64) -> Option<&Item> {
        self.item_idx.get(&id).map(|&i| &self.items[i])
    }

    pub fn tag(&self, id: i64) -> Option<&Tag> {
        self.tag_idx.get(&id).map(|&i| &self.tags[i])
    }

    pub fn addon(&self, id: i64) -> Option<&Addon> {
        self.addon_idx.get(&id).map(|&i| &self.addons[i])
    }

    // ==================== Hierarchy reads ====================

    /// Active services in catalog order
    pub fn active_services(&self) -> Vec<&Service> {
        self.services.iter().filter(|s| s.is_active).collect()
    }

    /// Categories of a service in catalog order
    ///
    /// Empty when the service is unknown or inactive. Orphaned
    /// categories (service deleted on the backend) never appear
    /// because they can only be reached through their owning service.
    pub fn categories_of(&self, service_id: i64) -> Vec<&Category> {
        match self.service(service_id) {
            Some(service) if service.is_active => self
                .categories
                .iter()
                .filter(|c| c.service_id == service_id)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Subcategories of a category in catalog order
    pub fn sub_categories_of(&self, category_id: i64) -> Vec<&SubCategory> {
        self.sub_categories
            .iter()
            .filter(|s| s.category_id == category_id)
            .collect()
    }

    /// Items of a category in catalog order (all subcategories included)
    pub fn items_in(&self, category_id: i64) -> Vec<&Item> {
        self.items_by_category
            .get(&category_id)
            .map(|positions| positions.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// Resolve an item's add-on groups in display order
    ///
    /// Dangling references (add-on deleted while still listed on the
    /// item) are skipped and logged, never an error.
    pub fn addons_of(&self, item: &Item) -> Vec<&Addon> {
        item.addon_ids
            .iter()
            .filter_map(|&id| {
                let addon = self.addon(id);
                if addon.is_none() {
                    tracing::warn!(
                        item_id = item.id,
                        addon_id = id,
                        "item references missing add-on, skipping"
                    );
                }
                addon
            })
            .collect()
    }

    // ==================== Write-back (manager editor) ====================

    /// Insert or replace a single item (optimistic local edit)
    pub fn upsert_item(&mut self, item: Item) {
        match self.item_idx.get(&item.id) {
            Some(&i) => self.items[i] = item,
            None => self.items.push(item),
        }
        self.reindex_items();
    }

    /// Remove a single item; false when the id is unknown
    pub fn remove_item(&mut self, id: i64) -> bool {
        let Some(&i) = self.item_idx.get(&id) else {
            return false;
        };
        self.items.remove(i);
        self.reindex_items();
        true
    }

    /// Insert or replace a single add-on definition
    pub fn upsert_addon(&mut self, addon: Addon) {
        match self.addon_idx.get(&addon.id) {
            Some(&i) => self.addons[i] = addon,
            None => {
                self.addons.push(addon);
                self.addon_idx = index_by_id(&self.addons, |a| a.id);
            }
        }
    }

    /// Remove an add-on, cascade-detaching it from every referencing item
    ///
    /// Returns the number of items that were detached. The cascade keeps
    /// `has_addons` consistent with `addon_ids`; each detach is logged.
    pub fn remove_addon(&mut self, id: i64) -> usize {
        let Some(&i) = self.addon_idx.get(&id) else {
            return 0;
        };
        self.addons.remove(i);
        self.addon_idx = index_by_id(&self.addons, |a| a.id);

        let mut detached = 0;
        for item in &mut self.items {
            if item.addon_ids.contains(&id) {
                item.addon_ids.retain(|&a| a != id);
                item.has_addons = !item.addon_ids.is_empty();
                detached += 1;
                tracing::warn!(
                    item_id = item.id,
                    addon_id = id,
                    "detached removed add-on from item"
                );
            }
        }
        detached
    }

    /// Attach an add-on to an item (appended to its display order)
    pub fn attach_addon(&mut self, item_id: i64, addon_id: i64) -> AppResult<()> {
        if self.addon(addon_id).is_none() {
            return Err(AppError::new(ErrorCode::AddonNotFound).with_detail("addon_id", addon_id));
        }
        let Some(&i) = self.item_idx.get(&item_id) else {
            return Err(AppError::new(ErrorCode::ItemNotFound).with_detail("item_id", item_id));
        };
        let item = &mut self.items[i];
        if item.addon_ids.contains(&addon_id) {
            return Err(
                AppError::new(ErrorCode::AddonAlreadyAttached).with_detail("addon_id", addon_id)
            );
        }
        item.addon_ids.push(addon_id);
        item.has_addons = true;
        Ok(())
    }

    /// Detach an add-on from an item
    pub fn detach_addon(&mut self, item_id: i64, addon_id: i64) -> AppResult<()> {
        let Some(&i) = self.item_idx.get(&item_id) else {
            return Err(AppError::new(ErrorCode::ItemNotFound).with_detail("item_id", item_id));
        };
        let item = &mut self.items[i];
        if !item.addon_ids.contains(&addon_id) {
            return Err(
                AppError::new(ErrorCode::AddonNotAttached).with_detail("addon_id", addon_id)
            );
        }
        item.addon_ids.retain(|&a| a != addon_id);
        item.has_addons = !item.addon_ids.is_empty();
        Ok(())
    }

    // ==================== Internal ====================

    fn reindex_items(&mut self) {
        self.item_idx = index_by_id(&self.items, |i| i.id);
        self.items_by_category.clear();
        for (pos, item) in self.items.iter().enumerate() {
            self.items_by_category
                .entry(item.category_id)
                .or_default()
                .push(pos);
        }
    }
}

fn index_by_id<T>(entities: &[T], id: impl Fn(&T) -> i64) -> HashMap<i64, usize> {
    entities
        .iter()
        .enumerate()
        .map(|(pos, e)| (id(e), pos))
        .collect()
}
