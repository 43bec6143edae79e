//! Canonical text form for hashing.
//!
//! Two renditions of the same document that differ only in compatibility
//! codepoints, line endings, or markup whitespace must hash identically, so
//! everything is folded to one canonical form before the bytes reach the
//! digest.

#![forbid(unsafe_code)]

mod normalize;

pub use normalize::normalize;
