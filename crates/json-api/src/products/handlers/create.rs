//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{
        errors::into_api_error,
        handlers::json_body,
        payloads::{ProductBody, ProductResponse},
    },
    responses::{ApiError, Envelope},
    state::State,
};

/// Create Product Handler
///
/// Validates the body and stores it under a fresh id.
#[handler]
#[tracing::instrument(
    name = "products.create",
    skip_all,
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let body: ProductBody = json_body(req).await?;

    let new_product = body
        .into_new_product()
        .map_err(|_ignored| ApiError::bad_request_envelope("invalid expiration"))?;

    let product = state
        .app
        .products
        .create(new_product)
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("product_id", product.id.into_inner());

    res.status_code(StatusCode::CREATED);

    Ok(Json(Envelope::success(product.into())))
}
