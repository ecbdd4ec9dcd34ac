//! Password Hashing and Verification
//!
//! Credential handling built on bcrypt:
//! - Salted, computationally-expensive one-way hashing (work factor 10)
//! - Zeroization of clear text material
//! - A stored hash that fails to parse is reported as corrupt, never as
//!   a plain mismatch
//!
//! Password *policy* is deliberately thin: the only structural rule is
//! "not empty". Reuse prevention lives in the credential domain, not here.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// bcrypt work factor for new hashes
pub const BCRYPT_COST: u32 = 10;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is empty or contains only whitespace
    #[error("Password cannot be empty")]
    EmptyOrWhitespace,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a readable bcrypt string
    #[error("Stored password hash is unreadable")]
    CorruptHash,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Ensures password material is erased from memory when the value is
/// dropped. Does not implement `Clone`; Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password
    ///
    /// Unicode is normalized using NFKC before use so that equal-looking
    /// inputs verify equally. The only rejected shape is empty or
    /// whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.into().nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        Ok(Self(normalized))
    }

    /// Get the password for hashing/verification
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash the password with bcrypt (work factor [`BCRYPT_COST`])
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(self.as_str(), BCRYPT_COST)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in bcrypt's modular crypt format
///
/// Encodes the algorithm version, work factor, salt and digest in one
/// string, so it can be stored and verified without extra metadata.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a hash loaded from storage
    ///
    /// Structural validity is not checked here; a corrupt value surfaces
    /// as [`PasswordHashError::CorruptHash`] on the first `verify`.
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Recomputes the digest with the stored salt and compares. Returns
    /// `Ok(false)` on a plain mismatch; a stored hash bcrypt cannot parse
    /// is an error, not a mismatch.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password.as_str(), &self.hash)
            .map_err(|_| PasswordHashError::CorruptHash)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_empty() {
        let result = ClearTextPassword::new("");
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ");
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_short_password_accepted() {
        // Length policy is not enforced here.
        assert!(ClearTextPassword::new("P@ss1").is_ok());
    }

    #[test]
    fn test_unicode_password() {
        assert!(ClearTextPassword::new("パスワード安全です!").is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123!").unwrap();
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password).unwrap());

        let wrong_password = ClearTextPassword::new("WrongPassword123!").unwrap();
        assert!(!hashed.verify(&wrong_password).unwrap());
    }

    #[test]
    fn test_hash_uses_configured_cost() {
        let password = ClearTextPassword::new("TestPassword123!").unwrap();
        let hashed = password.hash().unwrap();
        // Modular crypt format: $2b$10$...
        assert!(hashed.as_str().contains("$10$"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = ClearTextPassword::new("TestPassword123!").unwrap();
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();
        assert_ne!(first.as_str(), second.as_str());
        assert!(second.verify(&password).unwrap());
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = ClearTextPassword::new("TestPassword123!").unwrap();
        let hashed = password.hash().unwrap();

        let restored = HashedPassword::from_stored(hashed.as_str().to_string());
        assert!(restored.verify(&password).unwrap());
    }

    #[test]
    fn test_corrupt_stored_hash() {
        let password = ClearTextPassword::new("TestPassword123!").unwrap();
        let corrupt = HashedPassword::from_stored("not_a_bcrypt_hash");
        assert!(matches!(
            corrupt.verify(&password),
            Err(PasswordHashError::CorruptHash)
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret-value").unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));

        let hashed = password.hash().unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(!debug_output.contains("$2"));
    }
}
