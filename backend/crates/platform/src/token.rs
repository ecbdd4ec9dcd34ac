//! Signed Bearer Tokens
//!
//! Time-bounded bearer tokens signed with HMAC-SHA256 using a process-wide
//! secret. Token shape: `base64url(claims-json) . base64url(signature)`.
//!
//! Verification is all-or-nothing: a bad signature, a malformed token and
//! an expired token are indistinguishable to the caller, so nothing about
//! which check failed leaks to a client.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Token verification error
///
/// Deliberately a single variant; the reason a token was rejected is
/// never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,
}

/// Claims carried by a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user this token asserts identity for
    pub sub: Uuid,
    /// Reset nonce, present only on password-reset tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Uuid>,
    /// Absolute expiry, milliseconds since the Unix epoch
    pub exp_ms: i64,
}

impl Claims {
    /// Check the embedded expiry against the current time
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.exp_ms
    }
}

/// Issues and verifies signed bearer tokens
///
/// The signing secret is loaded once at startup and read-only afterwards;
/// the service itself is cheap to clone and share.
#[derive(Clone)]
pub struct TokenService {
    secret: [u8; 32],
}

impl TokenService {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue a token for `sub` that expires `ttl` from now
    pub fn issue(&self, sub: Uuid, nonce: Option<Uuid>, ttl: Duration) -> String {
        let claims = Claims {
            sub,
            nonce,
            exp_ms: (Utc::now() + ttl).timestamp_millis(),
        };

        let payload = serde_json::to_vec(&claims).expect("claims serialize to JSON");
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify a token and return its claims
    ///
    /// Checks, in order: structure, signature, expiry. Every failure is
    /// [`TokenError::Invalid`].
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(TokenError::Invalid)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Invalid)?;

        // Constant-time comparison happens inside verify_slice.
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature).map_err(|_| TokenError::Invalid)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Invalid)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Invalid)?;

        if claims.is_expired() {
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new([7u8; 32])
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let sub = Uuid::new_v4();

        let token = svc.issue(sub, None, Duration::days(1));
        let claims = svc.verify(&token).unwrap();

        assert_eq!(claims.sub, sub);
        assert_eq!(claims.nonce, None);
    }

    #[test]
    fn test_nonce_roundtrip() {
        let svc = service();
        let sub = Uuid::new_v4();
        let nonce = Uuid::new_v4();

        let token = svc.issue(sub, Some(nonce), Duration::hours(1));
        let claims = svc.verify(&token).unwrap();

        assert_eq!(claims.nonce, Some(nonce));
    }

    #[test]
    fn test_expired_token_rejected() {
        let svc = service();
        let token = svc.issue(Uuid::new_v4(), None, Duration::seconds(-10));

        assert_eq!(svc.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let svc = service();
        let token = svc.issue(Uuid::new_v4(), None, Duration::days(1));

        let (payload, signature) = token.split_once('.').unwrap();
        let other = svc.issue(Uuid::new_v4(), None, Duration::days(1));
        let (other_payload, _) = other.split_once('.').unwrap();
        assert_ne!(payload, other_payload);

        // Claims from one token, signature from another.
        let forged = format!("{}.{}", other_payload, signature);
        assert_eq!(svc.verify(&forged), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let svc = service();
        let token = svc.issue(Uuid::new_v4(), None, Duration::days(1));

        let other = TokenService::new([8u8; 32]);
        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let svc = service();

        assert_eq!(svc.verify(""), Err(TokenError::Invalid));
        assert_eq!(svc.verify("no-dot-here"), Err(TokenError::Invalid));
        assert_eq!(svc.verify("a.b.c"), Err(TokenError::Invalid));
        assert_eq!(svc.verify("!!!.???"), Err(TokenError::Invalid));
    }
}
