//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{
        errors::into_api_error,
        handlers::{json_body, path_id},
        payloads::{ProductBody, ProductPatch, ProductResponse},
    },
    responses::{ApiError, Envelope},
    state::State,
};

/// Update Product Handler
///
/// Overlays the supplied fields on the stored product.
#[handler]
#[tracing::instrument(
    name = "products.update",
    skip_all,
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<ProductResponse>>, ApiError> {
    let id = path_id(req)?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    tracing::Span::current().record("product_id", id.into_inner());

    let existing = state
        .app
        .products
        .get_by_id(id)
        .await
        .map_err(into_api_error)?;

    let mut body = ProductBody::from(existing);
    let patch: ProductPatch = json_body(req).await?;

    patch.apply(&mut body);

    let record = body.into_record(id).or_400("Invalid expiration")?;

    let product = state
        .app
        .products
        .update(record)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::success(product.into())))
}
