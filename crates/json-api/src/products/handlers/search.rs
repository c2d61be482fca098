//! Search Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_api_error, payloads::ProductResponse},
    responses::{ApiError, Envelope},
    state::State,
};

/// Search Products Handler
///
/// Returns products priced at or above the `priceGt` query parameter.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ProductResponse>>>, ApiError> {
    let threshold = price_threshold(req.query::<String>("priceGt"))?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .search_by_price(threshold)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::success(
        products.into_iter().map(Into::into).collect(),
    )))
}

fn price_threshold(raw: Option<String>) -> Result<f64, ApiError> {
    raw.unwrap_or_default()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ApiError::bad_request("invalid price"))
}
