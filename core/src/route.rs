//! Right-to-left DP route solver over a prefix DAG (SPEC_FULL.md §4.2).
//!
//! Mirrors the shape of `libchinese-core::engine::Engine`'s candidate
//! scoring: walk backward accumulating log-probabilities, keep the best
//! continuation per position. Ties resolve to the *last* edge considered
//! at a position (`>=`), matching `jieba3/tok.py::_calc`'s `>=` comparison
//! exactly, not `>`.

use crate::model::Dict;

/// `route[i] = (j, score)`: the best segmentation starting at position `i`
/// takes the edge to `j`, and the total score of the suffix `chars[i..]`
/// under that choice is `score`.
pub fn solve_route(dag: &[Vec<(usize, u32)>], dict: &Dict) -> Vec<(usize, f64)> {
    let n = dag.len();
    let log_total = (dict.total.max(1) as f64).ln();
    let mut route = vec![(0usize, 0.0f64); n + 1];
    // route[n] is the empty suffix: score 0, no outgoing edge (j == n is a sentinel).

    for i in (0..n).rev() {
        let mut best_j = i + 1;
        let mut best_score = f64::NEG_INFINITY;
        for &(j, freq) in &dag[i] {
            let edge_score = (freq.max(1) as f64).ln() - log_total;
            let score = edge_score + route[j].1;
            if score >= best_score {
                best_score = score;
                best_j = j;
            }
        }
        route[i] = (best_j, best_score);
    }
    route
}

/// Replays `route` (as produced by [`solve_route`]) into the list of word
/// boundaries `(start, end)` from position `0` to `chars.len()`.
pub fn route_to_spans(route: &[(usize, f64)]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;
    let last = route.len() - 1;
    while i < last {
        let j = route[i].0;
        spans.push((i, j));
        i = j;
    }
    spans
}
