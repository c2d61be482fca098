//! Market Domain Concerns

pub mod products;
