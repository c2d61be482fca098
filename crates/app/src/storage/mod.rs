//! Product collection storage.
//!
//! The whole collection is the unit of persistence: adapters load every record
//! at once and overwrite every record at once.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::records::{ProductId, ProductRecord};

mod errors;
mod json;
mod memory;

pub use errors::StorageError;
pub use json::JsonFileStorage;
pub use memory::MemoryStorage;

/// Full product collection keyed by id.
pub type ProductMap = BTreeMap<ProductId, ProductRecord>;

#[automock]
#[async_trait]
pub trait ProductsStorage: Send + Sync {
    /// Load the entire collection.
    async fn read_all(&self) -> Result<ProductMap, StorageError>;

    /// Replace the entire collection.
    async fn write_all(&self, products: &ProductMap) -> Result<(), StorageError>;
}
