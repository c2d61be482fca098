//! Products

mod errors;
mod handlers;
pub(crate) mod payloads;

pub(crate) use handlers::*;
