//! Document sources for canonhash.

#![forbid(unsafe_code)]

mod file;
mod web;

pub use file::load_text_file;
pub use web::fetch_text;
