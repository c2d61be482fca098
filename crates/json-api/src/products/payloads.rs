//! Product request and response bodies.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use market_app::{
    dates,
    domain::products::{
        data::NewProduct,
        records::{ProductId, ProductRecord},
    },
};

/// Product as rendered in response bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    /// `DD/MM/YYYY`
    pub expiration: String,
    pub price: f64,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into_inner(),
            name: product.name,
            quantity: product.quantity,
            code_value: product.code_value,
            is_published: product.is_published,
            expiration: dates::format_date(product.expiration),
            price: product.price,
        }
    }
}

/// Product fields accepted by create and replace. Absent fields take their
/// zero value; unknown fields (including `id`) are ignored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ProductBody {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl ProductBody {
    /// Keys a replace body must carry, whatever their values.
    pub(crate) const REQUIRED_KEYS: [&'static str; 6] = [
        "name",
        "quantity",
        "code_value",
        "is_published",
        "expiration",
        "price",
    ];

    pub(crate) fn expiration(&self) -> Result<Date, jiff::Error> {
        dates::parse_date(&self.expiration)
    }

    /// Candidate for creation; an empty expiration is left for validation to
    /// reject as a missing field.
    pub(crate) fn into_new_product(self) -> Result<NewProduct, jiff::Error> {
        let expiration = if self.expiration.trim().is_empty() {
            None
        } else {
            Some(self.expiration()?)
        };

        Ok(NewProduct {
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration,
            price: self.price,
        })
    }

    pub(crate) fn into_record(self, id: ProductId) -> Result<ProductRecord, jiff::Error> {
        Ok(ProductRecord {
            id,
            expiration: self.expiration()?,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            price: self.price,
        })
    }
}

impl From<ProductRecord> for ProductBody {
    fn from(product: ProductRecord) -> Self {
        Self {
            name: product.name,
            quantity: product.quantity,
            code_value: product.code_value,
            is_published: product.is_published,
            expiration: dates::format_date(product.expiration),
            price: product.price,
        }
    }
}

/// Partial update. Absent or `null` fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub(crate) fn apply(self, body: &mut ProductBody) {
        if let Some(name) = self.name {
            body.name = name;
        }

        if let Some(quantity) = self.quantity {
            body.quantity = quantity;
        }

        if let Some(code_value) = self.code_value {
            body.code_value = code_value;
        }

        if let Some(is_published) = self.is_published {
            body.is_published = is_published;
        }

        if let Some(expiration) = self.expiration {
            body.expiration = expiration;
        }

        if let Some(price) = self.price {
            body.price = price;
        }
    }
}
