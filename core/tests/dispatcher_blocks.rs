// Integration coverage for the full dispatch path (cut_text over a dict with
// no HMM params), exercising Han/ASCII/whitespace/punctuation block mixing
// end to end rather than any single module in isolation.

use ahash::AHashMap;
use jieba_core::{cut_text, Dict};

fn toy_dict() -> Dict {
    let words: &[(&str, u32)] = &[
        ("我们", 300),
        ("是", 500),
        ("中国", 400),
        ("人", 600),
        ("北京", 250),
        ("天安门", 90),
    ];
    let mut freq = AHashMap::default();
    for &(w, f) in words {
        freq.insert(w.into(), f);
    }
    // Backfill proper prefixes per the §3 invariant: build_dag breaks its
    // prefix scan the first time a continuation isn't a key at all.
    for &(w, _) in words {
        let chars: Vec<char> = w.chars().collect();
        for end in 1..chars.len() {
            let prefix: String = chars[..end].iter().collect();
            freq.entry(prefix.into_boxed_str()).or_insert(0);
        }
    }
    Dict { freq, total: 60000 }
}

#[test]
fn mixed_han_and_ascii_sentence_splits_cleanly() {
    let dict = toy_dict();
    // Without the HMM fallback only alphanumeric runs get rejoined; the
    // dot between "v1" and "2" breaks the buffer, same as the reference
    // `_cut_block_without_hmm`'s `PURE_ENG` check.
    let words = cut_text("我们是中国人, v1.2!", &dict, None);
    assert_eq!(
        words,
        vec![
            "我们", "是", "中国", "人", ",", " ", "v1", ".", "2", "!",
        ]
    );
}

#[test]
fn multiple_whitespace_runs_are_each_kept_verbatim() {
    let dict = toy_dict();
    let words = cut_text("北京\t天安门", &dict, None);
    assert_eq!(words, vec!["北京", "\t", "天安门"]);
}

#[test]
fn empty_text_produces_no_words() {
    let dict = toy_dict();
    assert!(cut_text("", &dict, None).is_empty());
}
