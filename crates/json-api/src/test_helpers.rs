//! Test helpers.

use std::sync::Arc;

use jiff::civil::date;
use salvo::{affix_state::inject, prelude::*};

use market_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
    storage::MemoryStorage,
};

use crate::{router::app_router, state::State};

pub(crate) const TEST_TOKEN: &str = "test-token";

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        quantity: 10,
        code_value: "P100".to_string(),
        is_published: true,
        expiration: date(2040, 1, 1),
        price: 12.5,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate().never();

    auth
}

fn state_with(products: MockProductsService, auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_with(MockProductsService::new(), auth)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, strict_auth_mock())))
            .push(route),
    )
}

/// The full router over in-memory storage, guarded by [`TEST_TOKEN`].
pub(crate) fn memory_app_service() -> Service {
    let app = AppContext::from_storage(Arc::new(MemoryStorage::new()), TEST_TOKEN);

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(app_router()),
    )
}
