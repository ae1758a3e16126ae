//! Core types for storefront

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category ID type
pub type CategoryId = u64;

/// Product ID type
pub type ProductId = u64;

/// Soft upper bound on `name` fields, in characters
pub const NAME_MAX_CHARS: usize = 50;

/// Soft upper bound on `description` fields, in characters
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// A product grouping. Referenced by zero or more products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

/// Human-readable label: the category's name
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single catalog entry.
///
/// `category_id` is a weak reference: nothing guarantees a matching
/// `Category` row exists, and deleting a category leaves referencing
/// products in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: CategoryId,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Outcome of resolving a product's category reference.
///
/// The reference is not enforced at the storage layer, so a lookup can
/// come back empty; callers must handle both cases explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRef {
    Resolved(Category),
    Dangling(CategoryId),
}

impl CategoryRef {
    /// The display label of the referenced category, if it resolved
    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryRef::Resolved(category) => Some(&category.name),
            CategoryRef::Dangling(_) => None,
        }
    }
}
