//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::TokenService;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Login token TTL (1 day)
    pub login_token_ttl: Duration,
    /// Password reset token TTL (1 hour)
    pub reset_token_ttl: Duration,
    /// Base URL the reset token is appended to
    pub reset_link_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            login_token_ttl: Duration::from_secs(24 * 3600), // 1 day
            reset_token_ttl: Duration::from_secs(3600),      // 1 hour
            reset_link_base: "http://localhost:3000/api/reset-password".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token service signing with this config's secret
    pub fn token_service(&self) -> TokenService {
        TokenService::new(self.token_secret)
    }

    /// Login token TTL as a chrono duration
    pub fn login_ttl(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.login_token_ttl)
            .unwrap_or_else(|_| chrono::Duration::days(1))
    }

    /// Reset token TTL as a chrono duration
    pub fn reset_ttl(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.reset_token_ttl)
            .unwrap_or_else(|_| chrono::Duration::hours(1))
    }
}
