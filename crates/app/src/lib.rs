//! Shared application domain and persistence modules.

pub mod auth;
pub mod context;
pub mod dates;
pub mod domain;
pub mod storage;

#[cfg(test)]
mod test;

mod ids;

pub use ids::TypedId;
