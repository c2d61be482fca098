//! Products Data

use jiff::civil::Date;

/// New Product Data
///
/// Candidate fields for a product that has not been validated yet. A missing
/// expiration is kept as `None` so validation can report it as required.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: Option<Date>,
    pub price: f64,
}
