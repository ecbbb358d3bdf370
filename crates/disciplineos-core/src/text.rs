//! Text normalization and sanitization.
//!
//! The matching contract for check-ins is: two commitment texts are equal
//! iff `normalize(a) == normalize(b)`. Normalization canonicalizes line
//! endings, applies Unicode NFKC so visually identical characters compare
//! equal, and strips trailing whitespace. Leading and internal whitespace
//! is preserved.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize text for comparison.
///
/// CRLF becomes LF, the result is NFKC-normalized, and trailing whitespace
/// is removed. Idempotent.
pub fn normalize(s: &str) -> String {
    let unified = s.replace("\r\n", "\n");
    let folded: String = unified.nfkc().collect();
    folded.trim_end().to_string()
}

/// Normalize and scrub text before persisting it.
///
/// On top of [`normalize`], strips C0 control characters (tab and newline
/// survive) and zero-width/formatting characters, then truncates to
/// `max_len` characters. Over-long input is clamped, never rejected.
pub fn sanitize_for_storage(s: &str, max_len: usize) -> String {
    let out: String = normalize(s)
        .chars()
        .filter(|&c| !is_stripped_control(c) && !is_zero_width(c))
        .collect();

    match out.char_indices().nth(max_len) {
        Some((byte_idx, _)) => out[..byte_idx].to_string(),
        None => out,
    }
}

// C0 range minus tab (U+0009), LF (U+000A) and CR (U+000D).
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000C}' | '\u{000E}'..='\u{001F}')
}

// Zero-width and directional formatting characters, plus the BOM.
fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200F}' | '\u{FEFF}')
}

/// Parse an allow-list from free text: one entry per line, trimmed, blank
/// lines dropped, capped at `max_entries`.
pub fn parse_allow_list(text: &str, max_entries: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_entries)
        .map(str::to_string)
        .collect()
}

/// Join an allow-list back into line-separated display text.
pub fn allow_list_to_text(entries: &[String]) -> String {
    entries.join("\n")
}
