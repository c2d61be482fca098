//! Products service errors.

use thiserror::Error;

use crate::{
    domain::products::{repository::ProductsRepositoryError, validation::ValidationError},
    storage::StorageError,
};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found: {0}")]
    NotFound(&'static str),

    #[error("field required: {0}")]
    RequiredField(&'static str),

    #[error("invalid field: {0}")]
    QualityField(&'static str),

    #[error("product ids exhausted")]
    IdsExhausted,

    #[error("storage error")]
    Storage(#[source] StorageError),
}

impl From<ProductsRepositoryError> for ProductsServiceError {
    fn from(error: ProductsRepositoryError) -> Self {
        match error {
            ProductsRepositoryError::NotFound => Self::NotFound("id"),
            ProductsRepositoryError::IdsExhausted => Self::IdsExhausted,
            ProductsRepositoryError::Storage(source) => Self::Storage(source),
        }
    }
}

impl From<ValidationError> for ProductsServiceError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::RequiredField(field) => Self::RequiredField(field),
            ValidationError::QualityField(field) => Self::QualityField(field),
        }
    }
}
