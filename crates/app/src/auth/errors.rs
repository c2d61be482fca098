//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthServiceError {
    #[error("no token configured")]
    NotConfigured,

    #[error("token rejected")]
    InvalidToken,
}
