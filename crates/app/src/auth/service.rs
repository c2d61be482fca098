//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::AuthServiceError;

/// Accepts exactly one pre-shared token.
///
/// The presented value is compared verbatim, with no scheme prefix stripped.
/// An empty configured secret rejects every request.
#[derive(Clone)]
pub struct SharedSecretAuthService {
    secret: String,
}

impl SharedSecretAuthService {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for SharedSecretAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretAuthService")
            .field("secret", &"[redacted]")
            .finish()
    }
}

#[async_trait]
impl AuthService for SharedSecretAuthService {
    async fn authenticate(&self, token: &str) -> Result<(), AuthServiceError> {
        if self.secret.is_empty() {
            return Err(AuthServiceError::NotConfigured);
        }

        if token != self.secret {
            return Err(AuthServiceError::InvalidToken);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Checks a raw `Authorization` header value.
    async fn authenticate(&self, token: &str) -> Result<(), AuthServiceError>;
}
