//! Local filesystem storage backend
//!
//! Each table is persisted as a JSON array in its own file under the
//! configured root directory (`categories.json`, `products.json`). Reads
//! always go to disk, so every request observes the latest committed state.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

use crate::types::{Category, CategoryId, Product, ProductId};
use crate::{Error, Result};

use super::CatalogStore;

const CATEGORIES_FILE: &str = "categories.json";
const PRODUCTS_FILE: &str = "products.json";

/// Local filesystem storage
pub struct LocalStore {
    root_path: PathBuf,

    /// Serializes read-modify-write cycles on the table files
    write_lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(root_path: impl Into<PathBuf>) -> Result<Self> {
        let root_path = root_path.into();
        std::fs::create_dir_all(&root_path)?;
        Ok(Self {
            root_path,
            write_lock: Mutex::new(()),
        })
    }

    fn resolve_path(&self, file: &str) -> PathBuf {
        self.root_path.join(file)
    }

    /// Load a table file. A missing file is an empty table.
    async fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.resolve_path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let data = Bytes::from(fs::read(&path).await?);
        let rows = serde_json::from_slice(&data)
            .map_err(|e| Error::store(format!("corrupt table file {}: {}", file, e)))?;
        Ok(rows)
    }

    /// Persist a table file: write to a temporary path first, then rename,
    /// so a crash never leaves a half-written table behind.
    async fn write_table<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<()> {
        let data = Bytes::from(serde_json::to_vec_pretty(rows)?);

        let path = self.resolve_path(file);
        let temp_path = self.resolve_path(&format!("{}.tmp", file));

        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &path).await?;

        Ok(())
    }
}

#[async_trait]
impl CatalogStore for LocalStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.read_table(CATEGORIES_FILE).await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.read_table(PRODUCTS_FILE).await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let categories: Vec<Category> = self.read_table(CATEGORIES_FILE).await?;
        Ok(categories.into_iter().find(|c| c.id == id))
    }

    async fn upsert_category(&self, category: Category) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut categories: Vec<Category> = self.read_table(CATEGORIES_FILE).await?;
        categories.retain(|c| c.id != category.id);
        categories.push(category);

        self.write_table(CATEGORIES_FILE, &categories).await
    }

    async fn upsert_product(&self, product: Product) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut products: Vec<Product> = self.read_table(PRODUCTS_FILE).await?;
        products.retain(|p| p.id != product.id);
        products.push(product);

        self.write_table(PRODUCTS_FILE, &products).await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut categories: Vec<Category> = self.read_table(CATEGORIES_FILE).await?;
        categories.retain(|c| c.id != id);

        self.write_table(CATEGORIES_FILE, &categories).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut products: Vec<Product> = self.read_table(PRODUCTS_FILE).await?;
        products.retain(|p| p.id != id);

        self.write_table(PRODUCTS_FILE, &products).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn category(id: CategoryId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_local_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        assert!(store.list_categories().await.unwrap().is_empty());

        store.upsert_category(category(1, "Shoes")).await.unwrap();
        store.upsert_category(category(2, "Hats")).await.unwrap();

        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories.len(), 2);

        let found = store.get_category(1).await.unwrap();
        assert_eq!(found.unwrap().name, "Shoes");
        assert!(store.get_category(99).await.unwrap().is_none());

        store.delete_category(1).await.unwrap();
        assert!(store.get_category(1).await.unwrap().is_none());
        assert_eq!(store.list_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        store.upsert_category(category(1, "Shoes")).await.unwrap();
        store.upsert_category(category(1, "Sneakers")).await.unwrap();

        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Sneakers");
    }

    #[tokio::test]
    async fn test_delete_category_leaves_products() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        store.upsert_category(category(1, "Shoes")).await.unwrap();
        store
            .upsert_product(Product {
                id: 1,
                name: "Sneaker".to_string(),
                description: "Running shoe".to_string(),
                image: "http://x/img.png".to_string(),
                category_id: 1,
            })
            .await
            .unwrap();

        store.delete_category(1).await.unwrap();

        let products = store.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category_id, 1);
    }
}
