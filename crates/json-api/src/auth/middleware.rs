//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::debug;

use crate::{extensions::*, responses::ApiError, state::State};

/// Rejects requests whose raw `Authorization` header is not the shared token.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let auth = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => Arc::clone(&state.app.auth),
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let token = raw_authorization(req).unwrap_or_default();

    if let Err(error) = auth.authenticate(token).await {
        debug!(path = %req.uri().path(), "rejected request: {error}");

        res.render(ApiError::unauthorized());
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn raw_authorization(req: &Request) -> Option<&str> {
    req.headers().get(AUTHORIZATION)?.to_str().ok()
}
