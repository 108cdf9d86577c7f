//! 4-state (B/M/E/S) HMM Viterbi decoder and its wrapper over mixed text
//! (SPEC_FULL.md §4.3, §4.6). No direct teacher counterpart — built in the
//! teacher's data-oriented style (plain arrays/maps, no `unwrap` on model
//! data) since `libchinese-core` has no HMM of its own.

use crate::charclass::{split_retaining, ASCII_WORD, PURE_HAN};
use crate::model::{HmmParams, State};
use ahash::AHashMap;

/// Sentinel log-probability for missing emission/transition/start entries,
/// verbatim from `jieba3/tok.py`'s `LARGE_NEG` constant. Deliberately a
/// large finite negative number, not `f64::NEG_INFINITY`: two missing
/// entries summed together must stay comparable, not become `-inf + -inf`.
pub const LARGE_NEG: f64 = -3.14e100;

fn start_p(params: &HmmParams, state: State) -> f64 {
    params.state_prob.get(&state).copied().unwrap_or(LARGE_NEG)
}

fn emit_p(params: &HmmParams, state: State, ch: char) -> f64 {
    params
        .char_prob
        .get(&state)
        .and_then(|m| m.get(&ch))
        .copied()
        .unwrap_or(LARGE_NEG)
}

fn trans_p(params: &HmmParams, from: State, to: State) -> f64 {
    params
        .trans_prob
        .get(&from)
        .and_then(|m| m.get(&to))
        .copied()
        .unwrap_or(LARGE_NEG)
}

/// Decodes the most likely B/M/E/S state sequence for a run of characters
/// (expected to be a pure-Han span). Ties break toward the larger `State`
/// value, matching the Python original's `max()` over `(score, state)`
/// tuples with alphabetically-ordered single-letter state names.
pub fn viterbi(chars: &[char], params: &HmmParams) -> Vec<State> {
    if chars.is_empty() {
        return Vec::new();
    }

    let mut trellis: Vec<AHashMap<State, f64>> = Vec::with_capacity(chars.len());
    let mut backptr: Vec<AHashMap<State, State>> = Vec::with_capacity(chars.len());

    let mut first = AHashMap::default();
    for &s in &State::ALL {
        first.insert(s, start_p(params, s) + emit_p(params, s, chars[0]));
    }
    trellis.push(first);
    backptr.push(AHashMap::default());

    for t in 1..chars.len() {
        let mut cur = AHashMap::default();
        let mut back = AHashMap::default();
        for &y in &State::ALL {
            let e = emit_p(params, y, chars[t]);
            let prevs = params
                .prev_states
                .get(&y)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);

            let mut best_score = f64::NEG_INFINITY;
            let mut best_state = State::B;
            for &y0 in prevs {
                let prev_score = trellis[t - 1].get(&y0).copied().unwrap_or(LARGE_NEG);
                let score = prev_score + trans_p(params, y0, y) + e;
                if score > best_score || (score == best_score && y0 > best_state) {
                    best_score = score;
                    best_state = y0;
                }
            }
            cur.insert(y, best_score);
            back.insert(y, best_state);
        }
        trellis.push(cur);
        backptr.push(back);
    }

    let last = trellis.len() - 1;
    let mut best_state = State::E;
    let mut best_score = f64::NEG_INFINITY;
    for &y in &[State::E, State::S] {
        let score = trellis[last].get(&y).copied().unwrap_or(LARGE_NEG);
        if score > best_score || (score == best_score && y > best_state) {
            best_score = score;
            best_state = y;
        }
    }

    let mut path = vec![State::S; chars.len()];
    path[last] = best_state;
    let mut state = best_state;
    for t in (1..=last).rev() {
        state = backptr[t][&state];
        path[t - 1] = state;
    }
    path
}

fn path_to_words(chars: &[char], path: &[State]) -> Vec<String> {
    let mut words = Vec::new();
    let mut begin = 0usize;
    let mut next_i = 0usize;
    for (i, &state) in path.iter().enumerate() {
        match state {
            State::B => begin = i,
            State::E => {
                words.push(chars[begin..=i].iter().collect());
                next_i = i + 1;
            }
            State::S => {
                words.push(chars[i].to_string());
                next_i = i + 1;
            }
            State::M => {}
        }
    }
    if next_i < chars.len() {
        words.push(chars[next_i..].iter().collect());
    }
    words
}

/// Runs the Viterbi decoder over a pure-Han character run and regroups the
/// resulting state path into words.
pub fn hmm_cut_han(chars: &[char], params: &HmmParams) -> Vec<String> {
    let path = viterbi(chars, params);
    path_to_words(chars, &path)
}

/// The HMM fallback wrapper (SPEC_FULL.md §4.6): splits `segment` on pure
/// Han runs, decodes each Han run with Viterbi, and for non-Han runs keeps
/// both the ASCII-word matches and the unmatched gap characters between
/// them, in order — mirroring `jieba3/tok.py`'s `RE_ENG.split` usage,
/// which filters only on emptiness, not on whether a piece matched.
pub fn hmm_cut_mixed(segment: &str, params: &HmmParams) -> Vec<String> {
    let mut words = Vec::new();
    for (is_han, piece) in split_retaining(&PURE_HAN, segment) {
        if is_han {
            let chars: Vec<char> = piece.chars().collect();
            words.extend(hmm_cut_han(&chars, params));
        } else {
            for (_, sub) in split_retaining(&ASCII_WORD, piece) {
                if !sub.is_empty() {
                    words.push(sub.to_string());
                }
            }
        }
    }
    words
}
