//! Cleanup of raw model output before it is handed to the preview frame.
//!
//! Models are told to answer with bare HTML, but they still wrap the
//! document in markdown fences or prepend a sentence of prose often enough
//! that we normalize every response.

const DOCUMENT_START: &str = "<!doctype";

/// Strip markdown code fences and drop any preamble before the
/// `<!DOCTYPE` marker.
///
/// If the marker never occurs the fence-stripped text is returned as-is;
/// the caller renders whatever was produced.
pub fn normalize_document(text: &str) -> String {
    let stripped = strip_code_fences(text);
    if starts_with_ignore_ascii_case(&stripped, DOCUMENT_START) {
        return stripped;
    }
    match find_ignore_ascii_case(&stripped, DOCUMENT_START) {
        Some(idx) if idx > 0 => stripped[idx..].to_string(),
        _ => stripped,
    }
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```html\n", "")
        .replace("```html", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn starts_with_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let (h, n) = (haystack.as_bytes(), needle.as_bytes());
    h.len() >= n.len() && h[..n.len()].eq_ignore_ascii_case(n)
}

// The needle is pure ASCII, so a byte-window scan is exact and avoids the
// offset drift a `to_lowercase` round trip could introduce on non-ASCII input.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let n = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(n.len())
        .position(|window| window.eq_ignore_ascii_case(n))
}
