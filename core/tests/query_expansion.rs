// Integration coverage for cut_query's n-gram expansion riding on top of
// the full dispatch path, not just the isolated gram-generation loop.

use ahash::AHashMap;
use jieba_core::{cut_query, Dict};

fn toy_dict() -> Dict {
    let words: &[(&str, u32)] = &[
        ("中华人民共和国", 500),
        ("中华", 50),
        ("华人", 50),
        ("人民", 50),
        ("共和", 50),
        ("和国", 50),
        ("中华人", 20),
        ("共和国", 40),
        ("北京", 250),
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
fn short_word_is_not_expanded() {
    let dict = toy_dict();
    assert_eq!(cut_query("北京", &dict, None), vec!["北京".to_string()]);
}

#[test]
fn long_word_expands_into_grams_then_itself() {
    let dict = toy_dict();
    let words = cut_query("中华人民共和国", &dict, None);
    let idx = |needle: &str| words.iter().position(|w| w == needle).unwrap();

    assert_eq!(*words.last().unwrap(), "中华人民共和国");
    // 2-grams precede 3-grams, which precede the word itself.
    assert!(idx("中华") < idx("中华人"));
    assert!(idx("共和国") < words.len() - 1);
}
