//! App Router

use salvo::Router;

use crate::{auth, healthcheck, observability, ping, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("ping").get(ping::handler))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(products_router())
}

fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .post(products::create::handler),
        )
        // must precede `{id}`
        .push(Router::with_path("search").get(products::search::handler))
        .push(
            Router::with_path("{id}")
                .get(products::get::handler)
                .push(
                    Router::new()
                        .hoop(auth::middleware::handler)
                        .put(products::upsert::handler)
                        .patch(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
