//! Cryptographic core for canonhash.
//!
//! SHA-256 is implemented from scratch on 32-bit primitive operations; no
//! hashing crate appears in the dependency tree. The reference sha2 crate is
//! a dev-dependency only, used to cross-check this implementation in tests.

#![forbid(unsafe_code)]

pub mod sha256;
