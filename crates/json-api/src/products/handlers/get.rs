//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_api_error, handlers::path_id, payloads::ProductResponse},
    responses::{ApiError, Envelope},
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<ProductResponse>>, ApiError> {
    let id = path_id(req)?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_by_id(id)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::success(product.into())))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use market_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_by_id()
            .once()
            .withf(|id| *id == ProductId::new(7))
            .return_once(|_| Ok(make_product(7)));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Envelope<ProductResponse> = res.take_json().await?;

        assert_eq!(body.data, ProductResponse::from(make_product(7)));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_by_id()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound("id")));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(res.take_string().await?, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_by_id().never();

        let mut res = TestClient::get("http://example.com/products/abc")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(res.take_string().await?, "invalid id");

        Ok(())
    }
}
