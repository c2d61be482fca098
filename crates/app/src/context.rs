//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, SharedSecretAuthService},
    domain::products::{ProductsService, StoreProductsService},
    storage::ProductsStorage,
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context over a storage backend and a shared API token.
    #[must_use]
    pub fn from_storage(storage: Arc<dyn ProductsStorage>, token: impl Into<String>) -> Self {
        Self {
            products: Arc::new(StoreProductsService::new(storage)),
            auth: Arc::new(SharedSecretAuthService::new(token)),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
