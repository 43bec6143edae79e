use unicode_normalization::UnicodeNormalization;

/// Reduce text to its canonical hashable form.
///
/// NFKC normalization, then CRLF/CR unified to LF, then every run of Unicode
/// whitespace collapsed to a single ASCII space, then leading and trailing
/// whitespace dropped.
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let unified = folded.replace("\r\n", "\n").replace('\r', "\n");

    // Collapse and trim in one pass: a pending run only emits a space once a
    // non-whitespace char follows it, so edge runs never emit at all.
    let mut out = String::with_capacity(unified.len());
    let mut pending_gap = false;
    for ch in unified.chars() {
        if ch.is_whitespace() {
            pending_gap = true;
        } else {
            if pending_gap && !out.is_empty() {
                out.push(' ');
            }
            pending_gap = false;
            out.push(ch);
        }
    }
    out
}
