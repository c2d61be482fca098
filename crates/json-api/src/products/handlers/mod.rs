//! Product Handlers

use salvo::Request;
use serde::de::DeserializeOwned;

use market_app::domain::products::records::ProductId;

use crate::{extensions::*, responses::ApiError};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod search;
pub(crate) mod update;
pub(crate) mod upsert;

/// Parse the `{id}` path segment.
fn path_id(req: &Request) -> Result<ProductId, ApiError> {
    req.param::<String>("id")
        .unwrap_or_default()
        .parse::<i64>()
        .map(ProductId::new)
        .or_400("invalid id")
}

/// Decode the request body as JSON; any failure is `invalid body`.
async fn json_body<T: DeserializeOwned>(req: &mut Request) -> Result<T, ApiError> {
    let payload = req.payload().await.or_400("invalid body")?;

    serde_json::from_slice(payload).or_400("invalid body")
}
