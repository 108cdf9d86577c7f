//! jieba-core
//!
//! Dictionary-DAG + HMM Chinese word segmentation engine: no file I/O, no
//! global state — every entry point takes its dictionary and HMM
//! parameters as plain borrowed data, loaded by the `jieba-loader` crate.
//!
//! Public API:
//! - `cut_text` — segment text into words (§4.7)
//! - `cut_query` — segment text for search indexing, expanding long words
//!   into their dictionary-recognized 2/3-grams (§4.8)
//! - `Dict`, `HmmParams`, `ModelPreset`, `State` — the model data types

pub mod charclass;
pub mod dag;
pub mod dispatcher;
pub mod hmm;
pub mod model;
pub mod query;
pub mod route;
pub mod segment;

pub use hmm::LARGE_NEG;
pub use model::{Dict, HmmParams, ModelPreset, State};

/// Segments `text` into words (SPEC_FULL.md §4.7). `hmm` selects the HMM
/// fallback (§4.5) when `Some`, or the plain route-only segmentation
/// (§4.4) when `None`.
#[tracing::instrument(skip(dict, hmm), fields(len = text.len()))]
pub fn cut_text(text: &str, dict: &Dict, hmm: Option<&HmmParams>) -> Vec<String> {
    dispatcher::cut_text(text, dict, hmm)
}

/// Segments `text` for search indexing (SPEC_FULL.md §4.8): every word
/// yielded by [`cut_text`] additionally contributes its
/// dictionary-recognized 2-grams and 3-grams, ahead of the word itself.
/// Takes the same `Dict` used for segmentation so gram lookups can never
/// desynchronize from the model that produced the words.
#[tracing::instrument(skip(dict, hmm), fields(len = text.len()))]
pub fn cut_query(text: &str, dict: &Dict, hmm: Option<&HmmParams>) -> Vec<String> {
    query::cut_query(text, dict, hmm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    #[test]
    fn cut_text_and_cut_query_share_the_same_dictionary() {
        let mut freq = AHashMap::default();
        freq.insert("北京".into(), 200);
        let dict = Dict { freq, total: 1000 };

        assert_eq!(cut_text("北京", &dict, None), vec!["北京".to_string()]);
        assert_eq!(cut_query("北京", &dict, None), vec!["北京".to_string()]);
    }
}
