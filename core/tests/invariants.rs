// Property-based coverage of the universal invariants (SPEC_FULL.md §8).
// Grounded on `send-lexime`'s `lex-session` crate, the one example repo in
// the retrieval pack that reaches for `proptest` rather than hand-picked
// fixtures — the teacher itself has no property-test dependency.

use ahash::AHashMap;
use jieba_core::{cut_query, cut_text, Dict, HmmParams, State};
use proptest::prelude::*;
use std::collections::HashMap;

// Alphabet kept tiny and Han-only so dictionary entries never collide with
// ASCII/whitespace/punctuation — matching the real model file, which never
// carries ASCII keys (see the "ASCII grouping" invariant below).
const HAN_ALPHABET: &[char] = &['你', '好', '世', '界', '北', '京', '人', '中'];
const OTHER_CHARS: &[char] = &['a', 'b', '1', '2', ' ', '\t', '，', '!'];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            (0..HAN_ALPHABET.len()).prop_map(|i| HAN_ALPHABET[i]),
            (0..OTHER_CHARS.len()).prop_map(|i| OTHER_CHARS[i]),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_dict() -> impl Strategy<Value = Dict> {
    prop::collection::vec(
        (
            prop::collection::vec(
                (0..HAN_ALPHABET.len()).prop_map(|i| HAN_ALPHABET[i]),
                1..4,
            ),
            1u32..500,
        ),
        0..12,
    )
    .prop_map(|entries| {
        let words: Vec<String> = entries
            .iter()
            .map(|(chars, _)| chars.iter().collect())
            .collect();
        let mut freq = AHashMap::default();
        for (i, (chars, f)) in entries.into_iter().enumerate() {
            freq.insert(words[i].clone().into_boxed_str(), f);
        }
        // Backfill proper prefixes per the §3 invariant: build_dag breaks
        // its prefix scan the first time a continuation isn't a key at all.
        for word in &words {
            let chars: Vec<char> = word.chars().collect();
            for end in 1..chars.len() {
                let prefix: String = chars[..end].iter().collect();
                freq.entry(prefix.into_boxed_str()).or_insert(0);
            }
        }
        Dict { freq, total: 60000 }
    })
}

fn toy_hmm() -> HmmParams {
    let mut state_prob = AHashMap::default();
    for &s in &State::ALL {
        state_prob.insert(s, -1.0);
    }
    let mut char_table = AHashMap::default();
    for &ch in HAN_ALPHABET {
        char_table.insert(ch, -0.5);
    }
    let mut char_prob = AHashMap::default();
    for &s in &State::ALL {
        char_prob.insert(s, char_table.clone());
    }
    let mut trans_row = AHashMap::default();
    for &s in &State::ALL {
        trans_row.insert(s, -0.5);
    }
    let mut trans_prob = AHashMap::default();
    for &s in &State::ALL {
        trans_prob.insert(s, trans_row.clone());
    }
    let mut prev_states = AHashMap::default();
    prev_states.insert(State::B, vec![State::E, State::S]);
    prev_states.insert(State::M, vec![State::M, State::B]);
    prev_states.insert(State::E, vec![State::B, State::M]);
    prev_states.insert(State::S, vec![State::S, State::B]);

    HmmParams {
        state_prob,
        char_prob,
        trans_prob,
        prev_states,
    }
}

fn bag(words: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for w in words {
        *counts.entry(w.as_str()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn reconstruction_without_hmm(text in arb_text(), dict in arb_dict()) {
        let words = cut_text(&text, &dict, None);
        prop_assert_eq!(words.concat(), text);
    }

    #[test]
    fn reconstruction_with_hmm(text in arb_text(), dict in arb_dict()) {
        let hmm = toy_hmm();
        let words = cut_text(&text, &dict, Some(&hmm));
        prop_assert_eq!(words.concat(), text);
    }

    #[test]
    fn determinism(text in arb_text(), dict in arb_dict()) {
        let hmm = toy_hmm();
        let a = cut_text(&text, &dict, Some(&hmm));
        let b = cut_text(&text, &dict, Some(&hmm));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn no_empty_tokens(text in arb_text(), dict in arb_dict()) {
        let hmm = toy_hmm();
        for words in [cut_text(&text, &dict, None), cut_text(&text, &dict, Some(&hmm))] {
            prop_assert!(words.iter().all(|w| !w.is_empty()));
        }
    }

    #[test]
    fn query_is_a_superset_of_text(text in arb_text(), dict in arb_dict()) {
        let plain = cut_text(&text, &dict, None);
        let query = cut_query(&text, &dict, None);
        let plain_bag = bag(&plain);
        let query_bag = bag(&query);
        for (word, count) in plain_bag {
            prop_assert!(*query_bag.get(word).unwrap_or(&0) >= count);
        }
    }

    #[test]
    fn ascii_runs_never_split_inside_han_mix_blocks(text in arb_text(), dict in arb_dict()) {
        let hmm = toy_hmm();
        for words in [cut_text(&text, &dict, None), cut_text(&text, &dict, Some(&hmm))] {
            for w in &words {
                let chars: Vec<char> = w.chars().collect();
                if chars.len() > 1 {
                    // A multi-char token is never a mix of alnum and non-alnum
                    // characters, since ASCII runs and Han/punctuation never
                    // share a token (the dictionary here carries no ASCII keys).
                    let all_alnum = chars.iter().all(|c| c.is_ascii_alphanumeric());
                    let none_alnum = chars.iter().all(|c| !c.is_ascii_alphanumeric());
                    prop_assert!(all_alnum || none_alnum);
                }
            }
        }
    }
}
