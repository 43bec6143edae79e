use std::fs;
use std::path::Path;

use canonhash_core::{Error, Result};

/// Read a UTF-8 text file in full.
///
/// An unreadable or non-UTF-8 path is a hard error; it must never degrade
/// into hashing an empty document.
pub fn load_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.display().to_string(),
        source,
    })
}
