//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_api_error, handlers::path_id},
    responses::ApiError,
    state::State,
};

/// Delete Product Handler
#[handler]
#[tracing::instrument(
    name = "products.delete",
    skip_all,
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let id = path_id(req)?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    tracing::Span::current().record("product_id", id.into_inner());

    state
        .app
        .products
        .delete(id)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
