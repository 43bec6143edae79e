//! SHA-256 (FIPS 180-4), built from 32-bit primitive operations.
//!
//! One-shot only: the whole message is padded and folded block by block into
//! the chaining state. A streaming update/finalize API is a deliberate
//! extension point, not part of this module.

mod compress;
mod consts;
mod padding;
mod schedule;

pub use compress::compress;
pub use padding::pad;
pub use schedule::expand;

use canonhash_core::{Error, Result};
use consts::INITIAL_STATE;

/// Reference digest of the empty message (FIPS 180-4 example).
pub const EMPTY_DIGEST_HEX: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Reference digest of `"abc"` (FIPS 180-4 example).
pub const ABC_DIGEST_HEX: &str =
    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// Compute the SHA-256 digest of a byte sequence.
///
/// Callers hashing text must encode it first (`str::as_bytes`); there is no
/// implicit character-to-byte coercion anywhere in this crate.
pub fn digest(data: &[u8]) -> [u8; 32] {
    let mut state = INITIAL_STATE;
    for block in pad(data).chunks_exact(64) {
        state = compress(state, &expand(block));
    }

    let mut out = [0u8; 32];
    for (i, word) in state.iter().enumerate() {
        out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Render a digest as 64 lowercase hex characters, high nibble first.
pub fn to_hex(digest: &[u8; 32]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Digest and render in one step.
pub fn hex_digest(data: &[u8]) -> String {
    to_hex(&digest(data))
}

/// Known-answer check of the two reference vectors.
///
/// A mismatch means the round logic itself is wrong; every digest this build
/// would produce is then plausible-looking garbage, so callers must abort
/// before printing any real result.
pub fn self_test() -> Result<()> {
    let cases: [(&'static str, &[u8], &'static str); 2] = [
        ("empty input", b"", EMPTY_DIGEST_HEX),
        ("\"abc\"", b"abc", ABC_DIGEST_HEX),
    ];

    for (input, data, want) in cases {
        let got = hex_digest(data);
        if got != want {
            return Err(Error::SelfTestMismatch { input, got, want });
        }
    }
    Ok(())
}
