//! Storage abstraction layer
//!
//! Provides a unified interface over the catalog's two tables for the
//! local filesystem and in-memory backends.
//!
//! The write operations exist for lifecycle management (seeding, fixtures,
//! tests, out-of-band administration); none of them is reachable from the
//! HTTP surface.

use async_trait::async_trait;

use crate::types::{Category, CategoryId, Product, ProductId};
use crate::Result;

pub mod local;
pub mod memory;

/// Catalog storage backend trait
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Read every category row
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Read every product row
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Point lookup of a single category
    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>>;

    /// Insert or replace a category row (keyed by id)
    async fn upsert_category(&self, category: Category) -> Result<()>;

    /// Insert or replace a product row (keyed by id)
    async fn upsert_product(&self, product: Product) -> Result<()>;

    /// Delete a category row if present. Referencing products are left
    /// untouched; their references dangle afterwards.
    async fn delete_category(&self, id: CategoryId) -> Result<()>;

    /// Delete a product row if present
    async fn delete_product(&self, id: ProductId) -> Result<()>;
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Local { root_path: String },
    Memory,
}

/// Create a storage backend from config
pub fn create_store(config: StoreConfig) -> Result<Box<dyn CatalogStore>> {
    match config {
        StoreConfig::Local { root_path } => {
            let backend = local::LocalStore::new(root_path)?;
            Ok(Box::new(backend))
        }
        StoreConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
    }
}
