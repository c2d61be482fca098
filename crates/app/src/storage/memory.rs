//! In-memory storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::products::records::ProductRecord,
    storage::{ProductMap, ProductsStorage, StorageError},
};

/// Keeps the product collection in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    products: RwLock<ProductMap>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage seeded with the given records.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = ProductRecord>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

#[async_trait]
impl ProductsStorage for MemoryStorage {
    async fn read_all(&self) -> Result<ProductMap, StorageError> {
        Ok(self.products.read().await.clone())
    }

    async fn write_all(&self, products: &ProductMap) -> Result<(), StorageError> {
        *self.products.write().await = products.clone();

        Ok(())
    }
}
