//! Catalog engine for the hotel menu platform
//!
//! The browsing core shared by the customer-facing service page and the
//! manager's item editor:
//! - [`store`]: in-memory catalog mirror with per-family loaded flags
//! - [`selection`]: cascading hierarchy cursor (service -> category ->
//!   subcategory) with descendant reset
//! - [`filter`]: orthogonal dietary/tag/price filters over one scope
//! - [`addon`]: add-on selection state and pricing
//! - [`loader`]: async catalog loads with stale-response fencing
//!
//! Everything except the loader is pure synchronous computation over
//! already-resident data.

pub mod addon;
pub mod filter;
pub mod loader;
pub mod selection;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use addon::{AddonError, AddonSelection, total_price, validate_addon};
pub use filter::{DietaryFilter, FilterState, PriceSort, TagFilter, dietary_filter_applicable, filtered_items};
pub use loader::{CatalogBackend, CatalogLoader};
pub use selection::{CascadingSelection, Direction};
pub use store::{CatalogStore, ResourceFamily};
