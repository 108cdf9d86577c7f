//! jieba-loader
//!
//! Reads `jieba-core`'s JSON model files off disk (SPEC_FULL.md §6.2) and
//! validates the §3 prefix invariant before handing the data to the pure
//! core. All file I/O and fallibility lives here, mirroring the teacher's
//! `anyhow::Result` + `?` style in `ngram.rs`'s `save_bincode`/`load_bincode`
//! and `lib.rs`'s `Lexicon::load_from_fst_bincode`.

use anyhow::{bail, Context, Result};
use jieba_core::{Dict, HmmParams, ModelPreset};
use std::path::{Path, PathBuf};

/// Resolves the model directory: `JIEBA_MODEL_DIR` if set, else `./data` —
/// the same "look in a conventional data directory" shape as
/// `libpinyin/src/main.rs`'s `Path::new("data")` lookup.
pub fn model_dir() -> PathBuf {
    std::env::var_os("JIEBA_MODEL_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Loads and validates `model.<preset>.json` from `dir`.
pub fn load_dict(dir: &Path, preset: ModelPreset) -> Result<Dict> {
    let path = dir.join(format!("model.{}.json", preset.file_stem()));
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading model file {}", path.display()))?;
    let dict: Dict = serde_json::from_str(&text)
        .with_context(|| format!("parsing model file {}", path.display()))?;
    validate_prefix_invariant(&dict)
        .with_context(|| format!("validating model file {}", path.display()))?;
    tracing::info!(preset = %preset, words = dict.freq.len(), "loaded model");
    Ok(dict)
}

/// Loads `hmm.json` from `dir`. No structural validation beyond what
/// `serde_json` already enforces — missing table entries are a documented
/// steady-state case (§3), not malformed data.
pub fn load_hmm(dir: &Path) -> Result<HmmParams> {
    let path = dir.join("hmm.json");
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading HMM file {}", path.display()))?;
    let hmm: HmmParams = serde_json::from_str(&text)
        .with_context(|| format!("parsing HMM file {}", path.display()))?;
    tracing::info!(states = hmm.state_prob.len(), "loaded HMM parameters");
    Ok(hmm)
}

/// Every non-empty proper prefix of a word (a key with `freq > 0`) must
/// itself be a key in `freq` — either another word or an explicit
/// 0-frequency prefix entry. This is what lets the DAG builder (§4.1) stop
/// extending a prefix scan on the first unknown continuation instead of
/// scanning to the end of the string every time.
fn validate_prefix_invariant(dict: &Dict) -> Result<()> {
    for (word, &freq) in &dict.freq {
        if freq == 0 {
            continue;
        }
        let chars: Vec<char> = word.chars().collect();
        for end in 1..chars.len() {
            let prefix: String = chars[..end].iter().collect();
            if !dict.freq.contains_key(prefix.as_str()) {
                bail!(
                    "word {:?} has freq {} but its prefix {:?} is not a key in the model",
                    word,
                    freq,
                    prefix
                );
            }
        }
    }
    Ok(())
}
