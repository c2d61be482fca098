//! Storage errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access products file")]
    Io(#[source] io::Error),

    #[error("failed to decode products file")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode products")]
    Encode(#[source] serde_json::Error),

    #[error("invalid expiration date {value:?} for product {id}")]
    Date {
        id: i64,
        value: String,
        #[source]
        source: jiff::Error,
    },
}
