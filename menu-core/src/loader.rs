//! Catalog Loader
//!
//! Bridges the async backend into the synchronous [`CatalogStore`].
//! Each resource family is fetched independently; on success the
//! family is replaced wholesale, on failure the previous data and the
//! loaded flag are left untouched.
//!
//! Re-fetch races are settled with per-family generation fencing: a
//! load captures the family's generation at dispatch and its response
//! is discarded if a later dispatch has already applied. The winner is
//! the last *dispatched* request, so a slow stale response can never
//! clobber newer data.

use crate::store::{CatalogStore, ResourceFamily};
use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{Addon, Category, Item, Service, SubCategory, Tag};
use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// List endpoints of the backend REST collaborator
///
/// Implemented by `menu-client`'s HTTP client; tests use in-crate stubs.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    async fn list_services(&self) -> AppResult<Vec<Service>>;
    async fn list_categories(&self) -> AppResult<Vec<Category>>;
    async fn list_sub_categories(&self) -> AppResult<Vec<SubCategory>>;
    async fn list_items(&self) -> AppResult<Vec<Item>>;
    async fn list_tags(&self) -> AppResult<Vec<Tag>>;
    async fn list_addons(&self) -> AppResult<Vec<Addon>>;
}

/// One family's fetched payload
enum FamilyPayload {
    Services(Vec<Service>),
    Categories(Vec<Category>),
    SubCategories(Vec<SubCategory>),
    Items(Vec<Item>),
    Tags(Vec<Tag>),
    Addons(Vec<Addon>),
}

/// Per-family dispatch/apply counters for stale-response fencing
#[derive(Debug, Clone, Copy, Default)]
struct FamilyGeneration {
    dispatched: u64,
    applied: u64,
}

/// Owns the catalog store and keeps it fed from a backend
pub struct CatalogLoader<B> {
    backend: B,
    store: RwLock<CatalogStore>,
    generations: Mutex<[FamilyGeneration; 6]>,
}

impl<B: CatalogBackend> CatalogLoader<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            store: RwLock::new(CatalogStore::new()),
            generations: Mutex::new([FamilyGeneration::default(); 6]),
        }
    }

    /// Read access to the catalog store
    pub fn store(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.store.read().expect("catalog store lock poisoned")
    }

    /// Write access to the catalog store (manager editor write-back)
    pub fn store_mut(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.store.write().expect("catalog store lock poisoned")
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch one family and replace it in the store
    ///
    /// Returns whether the response was applied: `Ok(false)` means a
    /// later dispatch already applied and this response was discarded.
    /// On fetch failure the store is untouched and the error is
    /// returned for the presentation layer to surface.
    pub async fn load(&self, family: ResourceFamily) -> AppResult<bool> {
        let my_generation = {
            let mut generations = self
                .generations
                .lock()
                .expect("loader generations lock poisoned");
            let generation = &mut generations[family.index()];
            generation.dispatched += 1;
            generation.dispatched
        };

        let payload = match self.fetch(family).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(
                    family = family.name(),
                    error = %err,
                    "catalog load failed, keeping previous data"
                );
                return Err(err);
            }
        };

        // Fence and apply atomically: generations lock, then store lock
        let mut generations = self
            .generations
            .lock()
            .expect("loader generations lock poisoned");
        let generation = &mut generations[family.index()];
        if generation.applied > my_generation {
            tracing::debug!(
                family = family.name(),
                generation = my_generation,
                applied = generation.applied,
                "discarding stale catalog response"
            );
            return Ok(false);
        }
        generation.applied = my_generation;

        let mut store = self.store.write().expect("catalog store lock poisoned");
        match payload {
            FamilyPayload::Services(data) => store.replace_services(data),
            FamilyPayload::Categories(data) => store.replace_categories(data),
            FamilyPayload::SubCategories(data) => store.replace_sub_categories(data),
            FamilyPayload::Items(data) => store.replace_items(data),
            FamilyPayload::Tags(data) => store.replace_tags(data),
            FamilyPayload::Addons(data) => store.replace_addons(data),
        }
        tracing::debug!(family = family.name(), "catalog family replaced");
        Ok(true)
    }

    /// Fetch all six families concurrently
    ///
    /// Completions have no ordering guarantee; consumers tolerate
    /// partial catalogs. Every family is attempted even when some
    /// fail; the first failure is returned with the failure count.
    pub async fn load_all(&self) -> AppResult<()> {
        let (services, categories, sub_categories, items, tags, addons) = tokio::join!(
            self.load(ResourceFamily::Services),
            self.load(ResourceFamily::Categories),
            self.load(ResourceFamily::SubCategories),
            self.load(ResourceFamily::Items),
            self.load(ResourceFamily::Tags),
            self.load(ResourceFamily::Addons),
        );

        let mut first_err = None;
        let mut failed = 0u32;
        for result in [services, categories, sub_categories, items, tags, addons] {
            if let Err(err) = result {
                failed += 1;
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            None => Ok(()),
            Some(err) => Err(err.with_detail("failed_families", failed)),
        }
    }

    async fn fetch(&self, family: ResourceFamily) -> AppResult<FamilyPayload> {
        Ok(match family {
            ResourceFamily::Services => {
                FamilyPayload::Services(self.backend.list_services().await?)
            }
            ResourceFamily::Categories => {
                FamilyPayload::Categories(self.backend.list_categories().await?)
            }
            ResourceFamily::SubCategories => {
                FamilyPayload::SubCategories(self.backend.list_sub_categories().await?)
            }
            ResourceFamily::Items => FamilyPayload::Items(self.backend.list_items().await?),
            ResourceFamily::Tags => FamilyPayload::Tags(self.backend.list_tags().await?),
            ResourceFamily::Addons => FamilyPayload::Addons(self.backend.list_addons().await?),
        })
    }
}
