//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_api_error, payloads::ProductResponse},
    responses::{ApiError, Envelope},
    state::State,
};

/// Product Index Handler
///
/// Returns every product, ordered by id.
#[handler]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ProductResponse>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .get_all()
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::success(
        products.into_iter().map(Into::into).collect(),
    )))
}
