//! Products Repository

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    domain::products::records::{ProductData, ProductId, ProductRecord},
    storage::{ProductMap, ProductsStorage, StorageError},
};

#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("product not found")]
    NotFound,

    #[error("product ids exhausted")]
    IdsExhausted,

    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Record-level operations over a whole-collection store.
///
/// Every mutation loads the full collection, applies one change and writes the
/// full collection back while holding `last_id`, so mutations within one
/// process never interleave. The id counter is seeded from the highest stored
/// id on the first mutation and never moves backwards.
pub(crate) struct ProductsRepository {
    storage: Arc<dyn ProductsStorage>,
    last_id: Mutex<Option<ProductId>>,
}

impl ProductsRepository {
    #[must_use]
    pub(crate) fn new(storage: Arc<dyn ProductsStorage>) -> Self {
        Self {
            storage,
            last_id: Mutex::new(None),
        }
    }

    pub(crate) async fn get_all(&self) -> Result<ProductMap, ProductsRepositoryError> {
        Ok(self.storage.read_all().await?)
    }

    pub(crate) async fn get_by_id(
        &self,
        id: ProductId,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        self.storage
            .read_all()
            .await?
            .remove(&id)
            .ok_or(ProductsRepositoryError::NotFound)
    }

    pub(crate) async fn create(
        &self,
        product: ProductData,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        let mut last_id = self.last_id.lock().await;
        let mut products = self.storage.read_all().await?;

        let id = next_id(&mut last_id, &products)?;
        let record = ProductRecord::from_data(id, product);

        products.insert(id, record.clone());

        self.storage.write_all(&products).await?;

        debug!(product_id = %id, "created product");

        Ok(record)
    }

    pub(crate) async fn update_or_create(
        &self,
        product: ProductRecord,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        let mut last_id = self.last_id.lock().await;
        let mut products = self.storage.read_all().await?;

        let record = if products.contains_key(&product.id) {
            product
        } else {
            ProductRecord {
                id: next_id(&mut last_id, &products)?,
                ..product
            }
        };

        products.insert(record.id, record.clone());

        self.storage.write_all(&products).await?;

        Ok(record)
    }

    pub(crate) async fn update(
        &self,
        product: ProductRecord,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        let _last_id = self.last_id.lock().await;
        let mut products = self.storage.read_all().await?;

        let Some(existing) = products.get_mut(&product.id) else {
            return Err(ProductsRepositoryError::NotFound);
        };

        existing.clone_from(&product);

        self.storage.write_all(&products).await?;

        Ok(product)
    }

    pub(crate) async fn delete(&self, id: ProductId) -> Result<(), ProductsRepositoryError> {
        let _last_id = self.last_id.lock().await;
        let mut products = self.storage.read_all().await?;

        if products.remove(&id).is_none() {
            return Err(ProductsRepositoryError::NotFound);
        }

        self.storage.write_all(&products).await?;

        debug!(product_id = %id, "deleted product");

        Ok(())
    }
}

fn next_id(
    last_id: &mut Option<ProductId>,
    products: &ProductMap,
) -> Result<ProductId, ProductsRepositoryError> {
    let highest = products.keys().next_back().copied().unwrap_or_default();
    let id = last_id
        .map_or(highest, |last| last.max(highest))
        .checked_next()
        .ok_or(ProductsRepositoryError::IdsExhausted)?;

    *last_id = Some(id);

    Ok(id)
}
