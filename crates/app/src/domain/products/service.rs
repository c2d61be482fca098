//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::ProductsRepository,
        validation,
    },
    storage::ProductsStorage,
};

pub struct StoreProductsService {
    repository: ProductsRepository,
}

impl StoreProductsService {
    #[must_use]
    pub fn new(storage: Arc<dyn ProductsStorage>) -> Self {
        Self {
            repository: ProductsRepository::new(storage),
        }
    }
}

impl std::fmt::Debug for StoreProductsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreProductsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for StoreProductsService {
    async fn get_all(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.repository.get_all().await?;

        Ok(products.into_values().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.get_by_id(id).await?)
    }

    async fn search_by_price(
        &self,
        threshold: f64,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products: Vec<ProductRecord> = self
            .get_all()
            .await?
            .into_iter()
            .filter(|product| product.price >= threshold)
            .collect();

        if products.is_empty() {
            return Err(ProductsServiceError::NotFound("price"));
        }

        Ok(products)
    }

    async fn create(&self, product: NewProduct) -> Result<ProductRecord, ProductsServiceError> {
        let data = validation::validate(product)?;

        Ok(self.repository.create(data).await?)
    }

    async fn update_or_create(
        &self,
        product: ProductRecord,
    ) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.update_or_create(product).await?)
    }

    async fn update(&self, product: ProductRecord) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.update(product).await?)
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductsServiceError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by id.
    async fn get_all(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_by_id(&self, id: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Products priced at or above `threshold`; an empty result is `NotFound("price")`.
    async fn search_by_price(
        &self,
        threshold: f64,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Validates and stores a new product under a fresh id.
    async fn create(&self, product: NewProduct) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites the product with the given id, or stores it under a fresh id
    /// when no such product exists. No validation is applied.
    async fn update_or_create(
        &self,
        product: ProductRecord,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites an existing product.
    async fn update(&self, product: ProductRecord) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product.
    async fn delete(&self, id: ProductId) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{dates, storage::StorageError, test::TestContext};

    use super::*;

    fn make_new_product(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            quantity: 5,
            code_value: "A123".to_string(),
            is_published: true,
            expiration: dates::today().tomorrow().ok(),
            price,
        }
    }

    #[tokio::test]
    async fn create_returns_new_id_and_fields() -> TestResult {
        let ctx = TestContext::new();

        let product = ctx.products.create(make_new_product("Widget", 9.99)).await?;

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.code_value, "A123");
        assert_eq!(product.price, 9.99);

        Ok(())
    }

    #[tokio::test]
    async fn created_product_is_retrievable() -> TestResult {
        let ctx = TestContext::new();

        let created = ctx.products.create(make_new_product("Widget", 9.99)).await?;
        let fetched = ctx.products.get_by_id(created.id).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn ids_increase_across_creates() -> TestResult {
        let ctx = TestContext::new();

        let mut previous = ProductId::default();

        for n in 0..5 {
            let created = ctx
                .products
                .create(make_new_product("Widget", f64::from(n)))
                .await?;

            assert!(created.id > previous, "ids must strictly increase");

            previous = created.id;
        }

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_negative_quantity() {
        let ctx = TestContext::new();

        let product = NewProduct {
            quantity: -1,
            ..make_new_product("Widget", 1.0)
        };

        let result = ctx.products.create(product).await;

        assert!(
            matches!(result, Err(ProductsServiceError::QualityField("quantity"))),
            "expected QualityField(quantity), got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let ctx = TestContext::new();

        let result = ctx.products.create(make_new_product("", 1.0)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::RequiredField("name"))),
            "expected RequiredField(name), got {result:?}"
        );
    }

    #[tokio::test]
    async fn invalid_create_stores_nothing() -> TestResult {
        let ctx = TestContext::new();

        let product = NewProduct {
            expiration: Some(date(2001, 1, 1)),
            ..make_new_product("Stale", 1.0)
        };

        assert!(ctx.products.create(product).await.is_err());
        assert!(ctx.products.get_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_unknown_is_tagged_not_found() {
        let ctx = TestContext::new();

        let result = ctx.products.get_by_id(ProductId::new(1)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound("id"))),
            "expected NotFound(id), got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_all_returns_products_in_id_order() -> TestResult {
        let ctx = TestContext::new();

        ctx.products.create(make_new_product("A", 1.0)).await?;
        ctx.products.create(make_new_product("B", 2.0)).await?;

        let names: Vec<String> = ctx
            .products
            .get_all()
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["A".to_string(), "B".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn search_by_price_is_inclusive() -> TestResult {
        let ctx = TestContext::new();

        for price in [5.0, 10.0, 15.0] {
            ctx.products
                .create(make_new_product("Priced", price))
                .await?;
        }

        let prices: Vec<f64> = ctx
            .products
            .search_by_price(10.0)
            .await?
            .into_iter()
            .map(|p| p.price)
            .collect();

        assert_eq!(prices, vec![10.0, 15.0]);

        Ok(())
    }

    #[tokio::test]
    async fn search_by_price_without_matches_is_not_found() -> TestResult {
        let ctx = TestContext::new();

        ctx.products.create(make_new_product("Cheap", 1.0)).await?;

        let result = ctx.products.search_by_price(100.0).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound("price"))),
            "expected NotFound(price), got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_or_create_skips_validation() -> TestResult {
        let ctx = TestContext::new();

        let record = ProductRecord {
            id: ProductId::new(1),
            name: String::new(),
            quantity: -3,
            code_value: "lowercase".to_string(),
            is_published: false,
            expiration: date(2001, 1, 1),
            price: -1.0,
        };

        let stored = ctx.products.update_or_create(record.clone()).await?;

        assert_eq!(stored, record);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let ctx = TestContext::new();

        let record = ProductRecord {
            id: ProductId::new(9),
            name: "Ghost".to_string(),
            quantity: 1,
            code_value: "G1".to_string(),
            is_published: true,
            expiration: date(2040, 1, 1),
            price: 1.0,
        };

        let result = ctx.products.update(record).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound("id"))),
            "expected NotFound(id), got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_makes_product_not_found() -> TestResult {
        let ctx = TestContext::new();

        let created = ctx.products.create(make_new_product("Gone", 1.0)).await?;

        ctx.products.delete(created.id).await?;

        let result = ctx.products.get_by_id(created.id).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound("id"))),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let ctx = TestContext::new();

        let result = ctx.products.delete(ProductId::new(999)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound("id"))),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn json_backed_service_survives_restart() -> TestResult {
        let ctx = TestContext::with_json_file()?;

        let created = ctx.products.create(make_new_product("Durable", 3.0)).await?;

        let reopened = ctx.reopen();

        assert_eq!(reopened.products.get_by_id(created.id).await?, created);

        let next = reopened
            .products
            .create(make_new_product("After restart", 4.0))
            .await?;

        assert_eq!(Some(next.id), created.id.checked_next());

        Ok(())
    }

    #[tokio::test]
    async fn corrupt_json_file_surfaces_storage_error() -> TestResult {
        let ctx = TestContext::with_json_file()?;

        ctx.write_raw("[{\"id\": 1")?;

        let result = ctx.products.get_all().await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Storage(StorageError::Decode(_)))
            ),
            "expected Storage(Decode), got {result:?}"
        );

        Ok(())
    }
}
