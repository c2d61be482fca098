//! Auth Config

use clap::Args;

/// Shared-secret authentication settings.
#[derive(Args)]
pub struct AuthConfig {
    /// Token expected verbatim in the `Authorization` header of mutating requests
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    pub token: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &"[redacted]")
            .finish()
    }
}
