//! Wire representation of catalog rows
//!
//! The projection from a stored `Product` (plus its resolved category
//! reference) to the response record is an explicit pure function, so the
//! transformation can be tested without a store or an HTTP server.

use serde::Serialize;

use crate::types::{CategoryRef, Product};

/// The listing endpoint's per-product output record.
///
/// Field order is the wire order. `category` carries the referenced
/// category's display label, not its id; a dangling reference serializes
/// as `null`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductView {
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: Option<String>,
}

/// Project one product row into its wire record.
///
/// `name`, `description` and `image` are copied verbatim.
pub fn project(product: &Product, category: &CategoryRef) -> ProductView {
    ProductView {
        name: product.name.clone(),
        description: product.description.clone(),
        image: product.image.clone(),
        category: category.label().map(str::to_string),
    }
}

/// Project a sequence of rows, one-to-one and order-preserving
pub fn project_all(rows: &[(Product, CategoryRef)]) -> Vec<ProductView> {
    rows.iter()
        .map(|(product, category)| project(product, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn sneaker() -> Product {
        Product {
            id: 1,
            name: "Sneaker".to_string(),
            description: "Running shoe".to_string(),
            image: "http://x/img.png".to_string(),
            category_id: 1,
        }
    }

    #[test]
    fn test_project_resolved() {
        let category = CategoryRef::Resolved(Category {
            id: 1,
            name: "Shoes".to_string(),
            description: "Footwear".to_string(),
        });

        let view = project(&sneaker(), &category);
        assert_eq!(view.name, "Sneaker");
        assert_eq!(view.description, "Running shoe");
        assert_eq!(view.image, "http://x/img.png");
        assert_eq!(view.category.as_deref(), Some("Shoes"));
    }

    #[test]
    fn test_project_dangling_is_null() {
        let view = project(&sneaker(), &CategoryRef::Dangling(1));
        assert_eq!(view.category, None);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["category"].is_null());
    }

    #[test]
    fn test_wire_shape_has_exactly_four_fields() {
        let category = CategoryRef::Resolved(Category {
            id: 1,
            name: "Shoes".to_string(),
            description: "Footwear".to_string(),
        });

        let json = serde_json::to_value(project(&sneaker(), &category)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for field in ["name", "description", "image", "category"] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
    }

    #[test]
    fn test_project_all_preserves_order() {
        let rows: Vec<_> = [3u64, 1, 2]
            .into_iter()
            .map(|id| {
                let mut product = sneaker();
                product.id = id;
                product.name = format!("p{}", id);
                (product, CategoryRef::Dangling(9))
            })
            .collect();

        let views = project_all(&rows);
        let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["p3", "p1", "p2"]);
    }
}
