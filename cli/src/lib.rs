//! `JiebaOptions`: a small binding object bundling a loaded model and HMM
//! setting with the two core operations, mirroring `jieba3.jieba3`'s
//! Pydantic model (`model`, `use_hmm` fields plus `cut_text`/`cut_query`
//! methods) from the original Python implementation.

use anyhow::Result;
use jieba_core::{Dict, HmmParams, ModelPreset};
use std::path::Path;

pub struct JiebaOptions {
    pub model: ModelPreset,
    pub dict: Dict,
    pub hmm: Option<HmmParams>,
}

impl JiebaOptions {
    /// Loads the dictionary for `model`, and the HMM tables too when
    /// `use_hmm` is set — matching the teacher's `Err`-propagating load
    /// functions, not a panic-on-missing-file shortcut.
    pub fn load(dir: &Path, model: ModelPreset, use_hmm: bool) -> Result<Self> {
        let dict = jieba_loader::load_dict(dir, model)?;
        let hmm = if use_hmm {
            Some(jieba_loader::load_hmm(dir)?)
        } else {
            None
        };
        Ok(Self { model, dict, hmm })
    }

    pub fn cut_text(&self, sentence: &str) -> Vec<String> {
        jieba_core::cut_text(sentence, &self.dict, self.hmm.as_ref())
    }

    pub fn cut_query(&self, sentence: &str) -> Vec<String> {
        jieba_core::cut_query(sentence, &self.dict, self.hmm.as_ref())
    }
}
