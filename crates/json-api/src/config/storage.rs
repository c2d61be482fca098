//! Storage Config

use std::{path::PathBuf, sync::Arc};

use clap::Args;

use market_app::storage::{JsonFileStorage, MemoryStorage, ProductsStorage};

/// Product storage backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// Products persisted as a JSON array in `PRODUCTS_FILE`.
    Json,

    /// Products kept in process memory only.
    Memory,
}

/// Product storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (json, memory)
    #[arg(
        long = "storage",
        env = "STORAGE_BACKEND",
        value_enum,
        default_value_t = StorageBackend::Json
    )]
    pub backend: StorageBackend,

    /// Path of the products file used by the json backend
    #[arg(long, env = "PRODUCTS_FILE", default_value = "products.json")]
    pub products_file: PathBuf,
}

impl StorageConfig {
    /// Build the configured storage adapter.
    #[must_use]
    pub fn build(&self) -> Arc<dyn ProductsStorage> {
        match self.backend {
            StorageBackend::Json => Arc::new(JsonFileStorage::new(&self.products_file)),
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        }
    }
}
