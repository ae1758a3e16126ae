//! Catalog management
//!
//! `Catalog` ties the storage backend to the HTTP surface:
//! - Bulk reads of both tables with category references resolved
//! - A validating write path for lifecycle operations (seeding, tests)
//!
//! Category references are weak: the store never enforces them, so
//! resolution produces an explicit [`CategoryRef`] per product instead of
//! assuming every lookup succeeds.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::store::CatalogStore;
use crate::types::{
    Category, CategoryRef, Product, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS,
};
use crate::{Error, Result};

/// Catalog over a storage backend
pub struct Catalog {
    store: Arc<dyn CatalogStore>,
}

/// Row counts, reported by the health endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogStats {
    pub categories: usize,
    pub products: usize,
}

/// Seed file layout: both tables as JSON arrays
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Read the full product table with each category reference resolved.
    ///
    /// Both tables are read once per call; no result is cached. Products
    /// are returned in ascending id order so repeated calls over unchanged
    /// data produce identical output.
    pub async fn list_with_categories(&self) -> Result<Vec<(Product, CategoryRef)>> {
        let categories = self.store.list_categories().await?;
        let mut products = self.store.list_products().await?;

        let by_id: HashMap<_, _> = categories.into_iter().map(|c| (c.id, c)).collect();

        products.sort_by_key(|p| p.id);

        Ok(products
            .into_iter()
            .map(|product| {
                let category = match by_id.get(&product.category_id) {
                    Some(category) => CategoryRef::Resolved(category.clone()),
                    None => CategoryRef::Dangling(product.category_id),
                };
                (product, category)
            })
            .collect())
    }

    /// Row counts across both tables
    pub async fn stats(&self) -> Result<CatalogStats> {
        Ok(CatalogStats {
            categories: self.store.list_categories().await?.len(),
            products: self.store.list_products().await?.len(),
        })
    }

    /// Insert or replace a category, enforcing the soft field bounds
    pub async fn add_category(&self, category: Category) -> Result<()> {
        validate_label_fields("category", &category.name, &category.description)?;
        self.store.upsert_category(category).await
    }

    /// Insert or replace a product, enforcing the soft field bounds.
    ///
    /// The category reference is deliberately not checked: dangling
    /// references are a permitted state.
    pub async fn add_product(&self, product: Product) -> Result<()> {
        validate_label_fields("product", &product.name, &product.description)?;
        self.store.upsert_product(product).await
    }

    /// Load a seed file into the store, skipping the load when the product
    /// table already has rows.
    pub async fn load_seed(&self, path: impl AsRef<Path>) -> Result<usize> {
        let existing = self.store.list_products().await?;
        if !existing.is_empty() {
            tracing::info!(
                products = existing.len(),
                "Product table already populated; skipping seed"
            );
            return Ok(0);
        }

        let data = tokio::fs::read(path.as_ref()).await?;
        let seed: SeedData = serde_json::from_slice(&data)?;

        let mut loaded = 0;
        for category in seed.categories {
            self.add_category(category).await?;
            loaded += 1;
        }
        for product in seed.products {
            self.add_product(product).await?;
            loaded += 1;
        }

        tracing::info!(rows = loaded, "Seed data loaded");
        Ok(loaded)
    }
}

fn validate_label_fields(entity: &str, name: &str, description: &str) -> Result<()> {
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(Error::invalid_row(format!(
            "{} name exceeds {} characters",
            entity, NAME_MAX_CHARS
        )));
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(Error::invalid_row(format!(
            "{} description exceeds {} characters",
            entity, DESCRIPTION_MAX_CHARS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn catalog() -> Catalog {
        Catalog::new(Arc::new(MemoryStore::new()))
    }

    fn shoes() -> Category {
        Category {
            id: 1,
            name: "Shoes".to_string(),
            description: "Footwear".to_string(),
        }
    }

    fn sneaker(id: u64, category_id: u64) -> Product {
        Product {
            id,
            name: "Sneaker".to_string(),
            description: "Running shoe".to_string(),
            image: "http://x/img.png".to_string(),
            category_id,
        }
    }

    #[tokio::test]
    async fn test_listing_resolves_categories() {
        let catalog = catalog();
        catalog.add_category(shoes()).await.unwrap();
        catalog.add_product(sneaker(1, 1)).await.unwrap();
        catalog.add_product(sneaker(2, 7)).await.unwrap();

        let rows = catalog.list_with_categories().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1, CategoryRef::Resolved(shoes()));
        assert_eq!(rows[1].1, CategoryRef::Dangling(7));
    }

    #[tokio::test]
    async fn test_listing_orders_by_product_id() {
        let catalog = catalog();
        catalog.add_category(shoes()).await.unwrap();
        for id in [3, 1, 2] {
            catalog.add_product(sneaker(id, 1)).await.unwrap();
        }

        let rows = catalog.list_with_categories().await.unwrap();
        let ids: Vec<_> = rows.iter().map(|(p, _)| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_soft_bounds_rejected_on_write() {
        let catalog = catalog();

        let mut category = shoes();
        category.name = "x".repeat(NAME_MAX_CHARS + 1);
        assert!(catalog.add_category(category).await.is_err());

        let mut product = sneaker(1, 1);
        product.description = "x".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert!(catalog.add_product(product).await.is_err());
    }

    #[tokio::test]
    async fn test_stats() {
        let catalog = catalog();
        catalog.add_category(shoes()).await.unwrap();
        catalog.add_product(sneaker(1, 1)).await.unwrap();

        let stats = catalog.stats().await.unwrap();
        assert_eq!(stats.categories, 1);
        assert_eq!(stats.products, 1);
    }
}
