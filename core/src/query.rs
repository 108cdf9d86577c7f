//! Query-mode n-gram expander (SPEC_FULL.md §4.8).
//!
//! Transliterated from `jieba3/tok.py::_cut_query`: every word longer than
//! two characters additionally emits its dictionary-recognized 2-grams,
//! every word longer than three characters additionally emits its
//! dictionary-recognized 3-grams, and the word itself is always emitted
//! last — after its n-grams, not before.

use crate::dispatcher::cut_text;
use crate::model::{Dict, HmmParams};

pub fn cut_query(text: &str, dict: &Dict, hmm: Option<&HmmParams>) -> Vec<String> {
    let mut out = Vec::new();
    for word in cut_text(text, dict, hmm) {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();

        if n > 2 {
            for i in 0..n - 1 {
                let gram: String = chars[i..i + 2].iter().collect();
                if dict.is_word(&gram) {
                    out.push(gram);
                }
            }
        }
        if n > 3 {
            for i in 0..n - 2 {
                let gram: String = chars[i..i + 3].iter().collect();
                if dict.is_word(&gram) {
                    out.push(gram);
                }
            }
        }
        out.push(word);
    }
    out
}
