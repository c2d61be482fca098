//! Product validation.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;
use thiserror::Error;

use crate::{
    dates,
    domain::products::{data::NewProduct, records::ProductData},
};

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time literal covered by tests"
)]
static CODE_VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][0-9]{1,5}[A-Z]?$").expect("code value pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field required: {0}")]
    RequiredField(&'static str),

    #[error("invalid field: {0}")]
    QualityField(&'static str),
}

/// Validate a candidate product against today's date.
///
/// # Errors
///
/// Returns the first failing check, see [`validate_at`].
pub fn validate(product: NewProduct) -> Result<ProductData, ValidationError> {
    validate_at(product, dates::today())
}

/// Validate a candidate product, treating `today` as the current date.
///
/// Required fields are checked first (name, code value, expiration), then
/// quality constraints (quantity, code pattern, expiration in the future,
/// price). The first failure is returned.
///
/// # Errors
///
/// Returns [`ValidationError::RequiredField`] or
/// [`ValidationError::QualityField`] tagged with the offending field.
pub fn validate_at(product: NewProduct, today: Date) -> Result<ProductData, ValidationError> {
    if product.name.is_empty() {
        return Err(ValidationError::RequiredField("name"));
    }

    if product.code_value.is_empty() {
        return Err(ValidationError::RequiredField("code_value"));
    }

    let Some(expiration) = product.expiration else {
        return Err(ValidationError::RequiredField("expiration"));
    };

    if product.quantity < 0 {
        return Err(ValidationError::QualityField("quantity"));
    }

    if !CODE_VALUE_PATTERN.is_match(&product.code_value) {
        return Err(ValidationError::QualityField("code_value"));
    }

    if expiration <= today {
        return Err(ValidationError::QualityField("expiration"));
    }

    if product.price.is_nan() || product.price < 0.0 {
        return Err(ValidationError::QualityField("price"));
    }

    Ok(ProductData {
        name: product.name,
        quantity: product.quantity,
        code_value: product.code_value,
        is_published: product.is_published,
        expiration,
        price: product.price,
    })
}
