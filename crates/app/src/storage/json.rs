//! JSON file storage.

use std::{
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::{fs, task};
use tracing::{debug, error};

use crate::{
    dates::DATE_FORMAT,
    domain::products::records::{ProductId, ProductRecord},
    storage::{ProductMap, ProductsStorage, StorageError},
};

/// On-disk product shape; expiration is kept as text.
#[derive(Debug, Serialize, Deserialize)]
struct StoredProduct {
    id: i64,
    name: String,
    quantity: i64,
    code_value: String,
    is_published: bool,
    expiration: String,
    price: f64,
}

/// Stores the product collection as a JSON array in a single file.
///
/// A missing file reads as an empty collection; the file is created on the
/// first write. Any other read or decode failure is an error. Writes go to a
/// sibling temporary file that is renamed over the target, so readers see
/// either the previous collection or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    date_format: String,
}

impl JsonFileStorage {
    /// Storage at `path` using the `DD/MM/YYYY` date layout.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_date_format(path, DATE_FORMAT)
    }

    /// Storage at `path` using a custom `strftime` date layout.
    #[must_use]
    pub fn with_date_format(path: impl Into<PathBuf>, date_format: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            date_format: date_format.into(),
        }
    }

    /// Parses a stored expiration. A trailing `HH:MM:SS` is accepted and
    /// truncated to the day.
    fn parse_expiration(&self, value: &str) -> Result<Date, jiff::Error> {
        match Date::strptime(&self.date_format, value) {
            Ok(date) => Ok(date),
            Err(source) => DateTime::strptime(format!("{} %H:%M:%S", self.date_format), value)
                .map(|datetime| datetime.date())
                .or(Err(source)),
        }
    }

    fn decode(&self, stored: StoredProduct) -> Result<ProductRecord, StorageError> {
        let expiration =
            self.parse_expiration(&stored.expiration).map_err(|source| {
                error!(
                    path = %self.path.display(),
                    id = stored.id,
                    "failed to parse expiration {:?}: {source}",
                    stored.expiration
                );

                StorageError::Date {
                    id: stored.id,
                    value: stored.expiration.clone(),
                    source,
                }
            })?;

        Ok(ProductRecord {
            id: ProductId::new(stored.id),
            name: stored.name,
            quantity: stored.quantity,
            code_value: stored.code_value,
            is_published: stored.is_published,
            expiration,
            price: stored.price,
        })
    }

    fn encode(&self, product: &ProductRecord) -> StoredProduct {
        StoredProduct {
            id: product.id.into_inner(),
            name: product.name.clone(),
            quantity: product.quantity,
            code_value: product.code_value.clone(),
            is_published: product.is_published,
            expiration: product.expiration.strftime(&self.date_format).to_string(),
            price: product.price,
        }
    }
}

#[async_trait]
impl ProductsStorage for JsonFileStorage {
    async fn read_all(&self) -> Result<ProductMap, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "products file missing, reading as empty");

                return Ok(ProductMap::new());
            }
            Err(source) => {
                error!(path = %self.path.display(), "failed to read products file: {source}");

                return Err(StorageError::Io(source));
            }
        };

        let stored: Vec<StoredProduct> = serde_json::from_slice(&bytes).map_err(|source| {
            error!(path = %self.path.display(), "failed to decode products file: {source}");

            StorageError::Decode(source)
        })?;

        stored
            .into_iter()
            .map(|product| self.decode(product).map(|record| (record.id, record)))
            .collect()
    }

    async fn write_all(&self, products: &ProductMap) -> Result<(), StorageError> {
        let stored: Vec<StoredProduct> = products.values().map(|p| self.encode(p)).collect();

        let mut bytes = serde_json::to_vec_pretty(&stored).map_err(|source| {
            error!("failed to encode products: {source}");

            StorageError::Encode(source)
        })?;

        bytes.push(b'\n');

        let path = self.path.clone();

        let result = match task::spawn_blocking(move || replace_file(&path, &bytes)).await {
            Ok(result) => result,
            Err(source) => Err(io::Error::other(source)),
        };

        result.map_err(|source| {
            error!(path = %self.path.display(), "failed to write products file: {source}");

            StorageError::Io(source)
        })
    }
}

fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;

    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path)?;

    Ok(())
}
