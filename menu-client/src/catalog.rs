//! Typed catalog API over the HTTP client
//!
//! List endpoints for every resource family plus the manager write
//! operations (items, add-ons, tags). Bodies ride in the backend's
//! `ApiResponse` envelope; a success without data is an invalid
//! response, not a panic.

use crate::{ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use menu_core::CatalogBackend;
use shared::error::{ApiResponse, AppResult};
use shared::models::{
    Addon, AddonCreate, AddonUpdate, Category, Item, ItemCreate, ItemUpdate, Service, SubCategory,
    Tag, TagCreate,
};

impl HttpClient {
    fn data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }

    // ========== Catalog lists ==========

    /// List all services
    pub async fn services(&self) -> ClientResult<Vec<Service>> {
        let response = self.get::<ApiResponse<Vec<Service>>>("api/services").await?;
        Self::data(response, "service list")
    }

    /// List all categories
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let response = self
            .get::<ApiResponse<Vec<Category>>>("api/categories")
            .await?;
        Self::data(response, "category list")
    }

    /// List all subcategories
    pub async fn sub_categories(&self) -> ClientResult<Vec<SubCategory>> {
        let response = self
            .get::<ApiResponse<Vec<SubCategory>>>("api/sub-categories")
            .await?;
        Self::data(response, "subcategory list")
    }

    /// List all items
    pub async fn items(&self) -> ClientResult<Vec<Item>> {
        let response = self.get::<ApiResponse<Vec<Item>>>("api/items").await?;
        Self::data(response, "item list")
    }

    /// List all tags
    pub async fn tags(&self) -> ClientResult<Vec<Tag>> {
        let response = self.get::<ApiResponse<Vec<Tag>>>("api/tags").await?;
        Self::data(response, "tag list")
    }

    /// List all add-ons
    pub async fn addons(&self) -> ClientResult<Vec<Addon>> {
        let response = self.get::<ApiResponse<Vec<Addon>>>("api/addons").await?;
        Self::data(response, "add-on list")
    }

    // ========== Item API ==========

    /// Create an item
    pub async fn create_item(&self, payload: &ItemCreate) -> ClientResult<Item> {
        let response = self
            .post::<ApiResponse<Item>, _>("api/items", payload)
            .await?;
        Self::data(response, "item")
    }

    /// Update an item
    pub async fn update_item(&self, id: i64, payload: &ItemUpdate) -> ClientResult<Item> {
        let response = self
            .put::<ApiResponse<Item>, _>(&format!("api/items/{}", id), payload)
            .await?;
        Self::data(response, "item")
    }

    /// Delete an item
    pub async fn delete_item(&self, id: i64) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("api/items/{}", id))
            .await?;
        Ok(())
    }

    // ========== Add-on API ==========

    /// Create an add-on
    pub async fn create_addon(&self, payload: &AddonCreate) -> ClientResult<Addon> {
        let response = self
            .post::<ApiResponse<Addon>, _>("api/addons", payload)
            .await?;
        Self::data(response, "add-on")
    }

    /// Update an add-on
    pub async fn update_addon(&self, id: i64, payload: &AddonUpdate) -> ClientResult<Addon> {
        let response = self
            .put::<ApiResponse<Addon>, _>(&format!("api/addons/{}", id), payload)
            .await?;
        Self::data(response, "add-on")
    }

    /// Delete an add-on
    ///
    /// The backend owns the deletion; the local mirror must follow up
    /// with `CatalogStore::remove_addon` to cascade-detach references.
    pub async fn delete_addon(&self, id: i64) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("api/addons/{}", id))
            .await?;
        Ok(())
    }

    // ========== Tag API ==========

    /// Create a tag
    pub async fn create_tag(&self, payload: &TagCreate) -> ClientResult<Tag> {
        let response = self.post::<ApiResponse<Tag>, _>("api/tags", payload).await?;
        Self::data(response, "tag")
    }

    /// Delete a tag
    pub async fn delete_tag(&self, id: i64) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("api/tags/{}", id))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogBackend for HttpClient {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        Ok(self.services().await?)
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories().await?)
    }

    async fn list_sub_categories(&self) -> AppResult<Vec<SubCategory>> {
        Ok(self.sub_categories().await?)
    }

    async fn list_items(&self) -> AppResult<Vec<Item>> {
        Ok(self.items().await?)
    }

    async fn list_tags(&self) -> AppResult<Vec<Tag>> {
        Ok(self.tags().await?)
    }

    async fn list_addons(&self) -> AppResult<Vec<Addon>> {
        Ok(self.addons().await?)
    }
}
