//! Storefront - a read-only HTTP API for a product catalog
//!
//! Storefront exposes a relational product catalog over HTTP:
//! - Two entities (`Category`, `Product`) with a weak one-to-many relation
//! - Pluggable storage backends (local filesystem, in-memory)
//! - An explicit projection from stored rows to the wire representation
//! - A single listing endpoint returning the full catalog as JSON

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod serializer;
pub mod store;
pub mod types;

pub use error::{Error, Result};
