//! Shared error type and result alias for canonhash.

#![forbid(unsafe_code)]

mod error;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
