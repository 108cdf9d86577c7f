//! Block segmenter (SPEC_FULL.md §4.4 without HMM, §4.5 with HMM).
//!
//! Transliterated from `jieba3/tok.py::_cut_block_without_hmm` /
//! `_cut_block_with_hmm`'s control flow: walk the DP route left to right,
//! and in the HMM variant, accumulate consecutive single-character route
//! spans into a buffer so that OOV runs get re-segmented together rather
//! than one character at a time.

use crate::dag::build_dag;
use crate::hmm::hmm_cut_mixed;
use crate::model::{Dict, HmmParams};
use crate::route::{route_to_spans, solve_route};

/// §4.4: each DP route span becomes one output word, except that runs of
/// single ASCII alphanumeric characters (English/digit runs with no
/// dictionary entry) are buffered and joined back together, since without
/// the HMM fallback there is no other mechanism to keep them as one token.
pub fn cut_block_without_hmm(chars: &[char], dict: &Dict) -> Vec<String> {
    let dag = build_dag(chars, dict);
    let route = solve_route(&dag, dict);
    let spans = route_to_spans(&route);

    let mut words = Vec::new();
    let mut buf = String::new();

    for (s, e) in spans {
        if e - s == 1 && chars[s].is_ascii_alphanumeric() {
            buf.push(chars[s]);
            continue;
        }
        if !buf.is_empty() {
            words.push(std::mem::take(&mut buf));
        }
        words.push(chars[s..e].iter().collect());
    }
    if !buf.is_empty() {
        words.push(buf);
    }
    words
}

/// §4.5: multi-character route spans are emitted directly; runs of
/// single-character spans are buffered and, once the run ends, either
/// passed through unchanged (run length 1), re-segmented by the HMM
/// wrapper (run as a whole is not a dictionary word), or split into
/// individual characters (run as a whole happens to be a dictionary word).
pub fn cut_block_with_hmm(chars: &[char], dict: &Dict, hmm: &HmmParams) -> Vec<String> {
    let dag = build_dag(chars, dict);
    let route = solve_route(&dag, dict);
    let spans = route_to_spans(&route);

    let mut words = Vec::new();
    let mut buf = String::new();

    for (s, e) in spans {
        let word: String = chars[s..e].iter().collect();
        if e - s == 1 {
            buf.push_str(&word);
        } else {
            flush_buf(&mut buf, dict, hmm, &mut words);
            words.push(word);
        }
    }
    flush_buf(&mut buf, dict, hmm, &mut words);

    words
}

fn flush_buf(buf: &mut String, dict: &Dict, hmm: &HmmParams, words: &mut Vec<String>) {
    if buf.is_empty() {
        return;
    }
    if buf.chars().count() == 1 {
        words.push(std::mem::take(buf));
    } else if !dict.is_word(buf.as_str()) {
        words.extend(hmm_cut_mixed(buf, hmm));
        buf.clear();
    } else {
        words.extend(buf.chars().map(|c| c.to_string()));
        buf.clear();
    }
}
