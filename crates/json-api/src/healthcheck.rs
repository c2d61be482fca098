//! Readiness Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{extensions::*, responses::ApiError, state::State};

/// Readiness report.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `unavailable`
    pub status: String,

    /// Products currently readable from storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<usize>,
}

/// Reports `ok` with the product count when storage can be read, otherwise
/// 503 `unavailable`.
#[handler]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let report = match state.app.products.get_all().await {
        Ok(products) => HealthResponse {
            status: "ok".to_owned(),
            products: Some(products.len()),
        },
        Err(error) => {
            warn!("healthcheck could not read products: {error}");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            HealthResponse {
                status: "unavailable".to_owned(),
                products: None,
            }
        }
    };

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use std::io;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use market_app::{
        domain::products::{MockProductsService, ProductsServiceError},
        storage::StorageError,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("healthcheck").get(handler))
    }

    #[tokio::test]
    async fn test_healthcheck_reports_product_count() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_all()
            .once()
            .return_once(|| Ok(vec![make_product(1), make_product(2)]));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.take_json::<HealthResponse>().await?,
            HealthResponse {
                status: "ok".to_owned(),
                products: Some(2),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_unreadable_storage_is_unavailable() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_all().once().return_once(|| {
            Err(ProductsServiceError::Storage(StorageError::Io(
                io::Error::other("unreadable"),
            )))
        });

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(
            res.take_json::<HealthResponse>().await?,
            HealthResponse {
                status: "unavailable".to_owned(),
                products: None,
            }
        );

        Ok(())
    }
}
