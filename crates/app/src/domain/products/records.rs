//! Product Records

use jiff::civil::Date;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: Date,
    pub price: f64,
}

impl ProductRecord {
    /// Build a record from validated product data under the given id.
    #[must_use]
    pub fn from_data(id: ProductId, data: ProductData) -> Self {
        Self {
            id,
            name: data.name,
            quantity: data.quantity,
            code_value: data.code_value,
            is_published: data.is_published,
            expiration: data.expiration,
            price: data.price,
        }
    }
}

/// Validated product fields, without an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: Date,
    pub price: f64,
}
