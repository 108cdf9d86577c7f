//! Prefix-DAG builder (SPEC_FULL.md §4.1).
//!
//! Adapted from `libchinese-core::trie::TrieNode::walk_prefixes`'s shape —
//! "walk forward from a start position, collect `(end, match)` pairs, stop
//! on the first character with no continuation" — but over the flat
//! `Dict::freq` map rather than a trie, per the "Trie vs. flat map" design
//! decision in DESIGN.md (the model file format is itself a flat
//! `{word: freq}` object, and the 0-frequency prefix-key invariant is
//! exactly what a flat map needs with no extra bookkeeping).

use crate::model::Dict;

/// `dag[i]` is the ordered list of `(j, freq)` pairs such that
/// `chars[i..j]` is a dictionary word with frequency `freq > 0`.
///
/// Every position has at least one outgoing edge: if no dictionary word
/// starts at `i`, a single-character fallback edge `(i + 1, 1)` is used.
pub fn build_dag(chars: &[char], dict: &Dict) -> Vec<Vec<(usize, u32)>> {
    let n = chars.len();
    let mut dag = Vec::with_capacity(n);
    for i in 0..n {
        let mut edges = Vec::new();
        let mut key = String::new();
        for j in (i + 1)..=n {
            key.push(chars[j - 1]);
            match dict.freq.get(key.as_str()) {
                None => break,
                Some(&freq) if freq > 0 => edges.push((j, freq)),
                Some(_) => {} // frequency 0: a prefix, keep extending
            }
        }
        if edges.is_empty() {
            edges.push((i + 1, 1));
        }
        dag.push(edges);
    }
    tracing::trace!(positions = n, "built prefix dag");
    dag
}
