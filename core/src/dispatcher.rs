//! Top-level dispatcher (SPEC_FULL.md §4.7).
//!
//! Transliterated from `jieba3/tok.py::_cut_text`: split the input on
//! `HAN_MIX` runs, send each Han-mix block through the DAG/route block
//! segmenter (with or without the HMM fallback), and for everything else
//! split on `SKIP` — whitespace runs pass through whole, anything else
//! (stray punctuation/symbols) is emitted one character at a time.

use crate::charclass::{split_retaining, HAN_MIX, SKIP};
use crate::model::{Dict, HmmParams};
use crate::segment::{cut_block_with_hmm, cut_block_without_hmm};

/// `hmm = Some(params)` selects §4.5 for Han-mix blocks; `None` selects the
/// plain §4.4 route-only segmentation.
pub fn cut_text(text: &str, dict: &Dict, hmm: Option<&HmmParams>) -> Vec<String> {
    let mut words = Vec::new();
    for (is_han, block) in split_retaining(&HAN_MIX, text) {
        if block.is_empty() {
            continue;
        }
        if is_han {
            let chars: Vec<char> = block.chars().collect();
            match hmm {
                Some(params) => words.extend(cut_block_with_hmm(&chars, dict, params)),
                None => words.extend(cut_block_without_hmm(&chars, dict)),
            }
        } else {
            for (is_skip, piece) in split_retaining(&SKIP, block) {
                if is_skip {
                    words.push(piece.to_string());
                } else {
                    words.extend(piece.chars().map(|c| c.to_string()));
                }
            }
        }
    }
    words
}
