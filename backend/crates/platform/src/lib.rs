//! Platform - Shared infrastructure primitives
//!
//! Domain-agnostic building blocks used by the feature crates:
//! - `password` - salted one-way password hashing and verification
//! - `token` - signed, time-bounded bearer tokens

pub mod password;
pub mod token;
