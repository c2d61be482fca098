//! Replace Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{
    extensions::*,
    products::{
        errors::into_api_error,
        handlers::{json_body, path_id},
        payloads::{ProductBody, ProductResponse},
    },
    responses::{ApiError, Envelope},
    state::State,
};

/// Replace Product Handler
///
/// Stores the full body under the path id, or under a fresh id when the path
/// id is unknown. Every product key must be present; values are not
/// validated.
#[handler]
#[tracing::instrument(
    name = "products.upsert",
    skip_all,
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<ProductResponse>>, ApiError> {
    let id = path_id(req)?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = require_keys(json_body::<Value>(req).await?)?;
    let body: ProductBody = serde_json::from_value(body).or_400("invalid body")?;

    let record = body
        .into_record(id)
        .map_err(|_ignored| ApiError::bad_request_envelope("invalid expiration"))?;

    let product = state
        .app
        .products
        .update_or_create(record)
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("product_id", product.id.into_inner());

    Ok(Json(Envelope::success(product.into())))
}

fn require_keys(body: Value) -> Result<Value, ApiError> {
    let complete = body.as_object().is_some_and(|fields| {
        ProductBody::REQUIRED_KEYS
            .iter()
            .all(|key| fields.contains_key(*key))
    });

    if !complete {
        return Err(ApiError::bad_request("invalid body"));
    }

    Ok(body)
}
