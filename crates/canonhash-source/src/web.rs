use std::time::Duration;

use canonhash_core::{Error, Result};
use scraper::{Html, Selector};

/// Request timeout for document fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Containers tried in order when pulling readable text out of a page. The
/// narrower content wrappers win over the full body when present.
const CONTENT_SELECTORS: &[&str] = &["main", "div#content", "div.content", "body"];

/// Fetch a document over HTTP and reduce it to readable text.
///
/// Tolerant by contract: network trouble, a bad status, or a page with no
/// text all yield `None` after a warning on stderr, so the caller can fall
/// back to a local file instead of unwinding.
pub fn fetch_text(url: &str) -> Option<String> {
    match fetch_document(url) {
        Ok(text) => Some(text),
        Err(err) => {
            eprintln!("[warn] fetch failed: {}", err);
            None
        }
    }
}

fn fetch_document(url: &str) -> Result<String> {
    let response = ureq::get(url)
        .timeout(FETCH_TIMEOUT)
        .call()
        .map_err(|err| match err {
            ureq::Error::Status(code, _) => Error::HttpStatus(code),
            other => Error::Request(other.to_string()),
        })?;

    let body = response
        .into_string()
        .map_err(|err| Error::Request(err.to_string()))?;

    extract_readable_text(&body).ok_or(Error::EmptyDocument)
}

/// Text content of the first matching content container, node texts trimmed
/// and joined with newlines.
fn extract_readable_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for css in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let fragments: Vec<&str> = element
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            if !fragments.is_empty() {
                return Some(fragments.join("\n"));
            }
        }
    }
    None
}
