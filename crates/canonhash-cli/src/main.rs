use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;

use canonhash_crypto::sha256;
use canonhash_source::{fetch_text, load_text_file};
use canonhash_text::normalize;

/// Document fetched when `--url` is given without a value: the Book of Mark,
/// Revised Standard Version.
const DEFAULT_URL: &str =
    "https://quod.lib.umich.edu/cgi/r/rsv/rsv-idx?type=DIV1&byte=4697892";

#[derive(Parser, Debug)]
#[command(
    name = "canonhash",
    about = "Canonical SHA-256 fingerprint of a text document"
)]
struct Args {
    /// Read the document from a local UTF-8 file
    #[arg(long = "file", value_name = "PATH", conflicts_with = "url")]
    file: Option<String>,

    /// Fetch the document over HTTP (defaults to the built-in document URL)
    #[arg(
        long = "url",
        value_name = "URL",
        num_args = 0..=1,
        default_missing_value = DEFAULT_URL
    )]
    url: Option<String>,
}

/// Where the document text comes from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    File(String),
    Url(String),
}

/// Resolve the mode flags to exactly one source.
fn select_source(args: &Args) -> Result<Source, &'static str> {
    match (&args.file, &args.url) {
        (Some(path), None) => Ok(Source::File(path.clone())),
        (None, Some(url)) => Ok(Source::Url(url.clone())),
        (None, None) => Err("one of --file <path> or --url [url] is required"),
        (Some(_), Some(_)) => Err("--file and --url are mutually exclusive"),
    }
}

/// Known-answer check of the digest core, printing the verified reference
/// pair. A mismatch here means every later digest would be silently wrong,
/// so the caller must abort.
fn run_self_test() -> anyhow::Result<()> {
    sha256::self_test().context("SHA-256 core failed its known-answer check")?;
    println!("sha256(\"\")    = {}", sha256::EMPTY_DIGEST_HEX);
    println!("sha256(\"abc\") = {}", sha256::ABC_DIGEST_HEX);
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap's rendered message, with the documented exit code for
            // missing/invalid arguments
            let _ = err.print();
            process::exit(1);
        }
    };

    let source = match select_source(&args) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    };

    if let Err(err) = run_self_test() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }

    let raw = match source {
        Source::File(path) => match load_text_file(Path::new(&path)) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        },
        Source::Url(url) => match fetch_text(&url) {
            Some(text) => text,
            None => {
                eprintln!(
                    "Error: failed to fetch. Save the page text to a local \
                     file and rerun with --file."
                );
                process::exit(2);
            }
        },
    };

    let clean = normalize(&raw);
    let bytes = clean.as_bytes();

    println!("Raw length (chars): {}", raw.chars().count());
    println!("Normalized length (bytes, UTF-8): {}", bytes.len());
    println!("SHA-256(document) = {}", sha256::hex_digest(bytes));
}
