//! In-memory storage backend
//!
//! Keeps both tables in process memory behind read-write locks. Nothing is
//! persisted; intended for tests and throwaway deployments.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::types::{Category, CategoryId, Product, ProductId};
use crate::Result;

use super::CatalogStore;

/// In-memory storage
#[derive(Default)]
pub struct MemoryStore {
    categories: RwLock<BTreeMap<CategoryId, Category>>,
    products: RwLock<BTreeMap<ProductId, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().cloned().collect())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn upsert_category(&self, category: Category) -> Result<()> {
        let mut categories = self.categories.write().await;
        categories.insert(category.id, category);
        Ok(())
    }

    async fn upsert_product(&self, product: Product) -> Result<()> {
        let mut products = self.products.write().await;
        products.insert(product.id, product);
        Ok(())
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        let mut categories = self.categories.write().await;
        categories.remove(&id);
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        let mut products = self.products.write().await;
        products.remove(&id);
        Ok(())
    }
}
