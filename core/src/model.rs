//! Model data types: the frequency dictionary and HMM parameter tables.
//!
//! Everything here is plain, `serde`-derived data — no file I/O. Reading
//! `model.<preset>.json` / `hmm.json` off disk is the `jieba-loader`
//! crate's job (see SPEC_FULL.md §6.2, §10.1).

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A frequency dictionary: the `freq` table plus its `total` scale.
///
/// `freq` holds both *words* (`freq > 0`) and *prefixes* (`freq == 0`,
/// inserted so the DAG builder can tell "not a word yet" apart from "not a
/// word at all"). See SPEC_FULL.md §3 for the invariant this relies on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dict {
    pub freq: AHashMap<Box<str>, u32>,
    pub total: u64,
}

impl Dict {
    /// Frequency of `key`, or `0` if absent (absent and present-with-zero
    /// are equivalent for scoring purposes; only the DAG builder cares
    /// about the distinction between "absent" and "prefix").
    pub fn frequency(&self, key: &str) -> u32 {
        self.freq.get(key).copied().unwrap_or(0)
    }

    /// Whether `key` is a dictionary word (frequency strictly positive).
    pub fn is_word(&self, key: &str) -> bool {
        self.frequency(key) > 0
    }
}

/// The three bundled dictionary sizes (SPEC_FULL.md §3, §6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelPreset {
    Base,
    Small,
    Large,
}

impl ModelPreset {
    /// File stem used for `model.<stem>.json`.
    pub fn file_stem(self) -> &'static str {
        match self {
            ModelPreset::Base => "base",
            ModelPreset::Small => "small",
            ModelPreset::Large => "large",
        }
    }
}

impl std::fmt::Display for ModelPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// HMM hidden state: character's role within a word.
///
/// `Ord` follows declaration order (`B < M < E < S`), which is exactly the
/// ordering the Viterbi tie-break (SPEC_FULL.md §4.3) relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum State {
    B,
    M,
    E,
    S,
}

impl State {
    pub const ALL: [State; 4] = [State::B, State::M, State::E, State::S];
}

/// Immutable HMM parameter tables (SPEC_FULL.md §3, §6.2). All floats are
/// natural-log probabilities; missing entries are treated as the sentinel
/// defined in `hmm::LARGE_NEG`, never as a hard error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HmmParams {
    pub state_prob: AHashMap<State, f64>,
    pub char_prob: AHashMap<State, AHashMap<char, f64>>,
    pub trans_prob: AHashMap<State, AHashMap<State, f64>>,
    pub prev_states: AHashMap<State, Vec<State>>,
}
