//! Character-class regexes (SPEC_FULL.md §6.3) and the "retaining split"
//! helper the dispatcher and HMM wrapper both depend on.
//!
//! Regexes are compiled once behind `once_cell::sync::Lazy`, the same
//! lazy-static shape `libpinyin/src/wade_giles.rs` uses for its lookup
//! tables (those wrap plain maps, not regexes — no teacher file actually
//! imports the `regex` crate, even though `libpinyin`/`libzhuyin`/`tools`
//! all declare it as a dependency; the `regex` dependency here stands on
//! its own merits, not on a teacher precedent of using it).

use once_cell::sync::Lazy;
use regex::Regex;

/// `HAN ∪ [A-Za-z0-9+#&._-]` — the dispatcher's block-classification regex.
pub static HAN_MIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{4E00}-\x{9FD5}a-zA-Z0-9+#&._%\-]+").unwrap());

/// Pure Han runs — used by the HMM wrapper to find Viterbi-eligible spans.
pub static PURE_HAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{4E00}-\x{9FD5}]+").unwrap());

/// One optional decimal part, one optional trailing percent sign.
pub static ASCII_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9]+(?:\.[0-9]+)?%?").unwrap());

/// `\r\n` or any whitespace codepoint.
pub static SKIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\s").unwrap());

/// Split `text` on `re`, retaining both the matched and unmatched pieces in
/// order (Python's `re.split` with a capturing group — SPEC_FULL.md §9's
/// "regex split retaining matches" note). Empty pieces are not filtered
/// here; callers drop them per §4.7/§4.6 as appropriate.
pub fn split_retaining<'a>(re: &Regex, text: &'a str) -> Vec<(bool, &'a str)> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            out.push((false, &text[last..m.start()]));
        }
        out.push((true, m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push((false, &text[last..]));
    }
    out
}
