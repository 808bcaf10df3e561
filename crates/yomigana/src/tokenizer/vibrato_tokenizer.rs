//! Tokenizer using vibrato

use std::sync::Arc;
use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::Tokenize;
use crate::errors::TokenizerError;
use crate::models::Morpheme;

/// Position of the reading in the feature array of MeCab/IPAdic dictionary format
const IDX_READING: usize = 7;

/// Japanese tokenizer backed by vibrato-rkyv
///
/// - Stateless (only holds dictionary reference)
/// - `Clone + Send + Sync`
#[derive(Clone)]
pub struct VibratoTokenizer {
  inner: VibratoImpl,
}

impl VibratoTokenizer {
  /// Constructs a tokenizer from an already loaded Dictionary
  pub fn from_dictionary(dict: Dictionary) -> Self {
    Self {
      inner: VibratoImpl::new(dict),
    }
  }

  /// Constructs a tokenizer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// Use this with `DictionaryManager::load()`.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use yomigana::dictionary::DictionaryManager;
  /// # use yomigana::tokenizer::VibratoTokenizer;
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let dict = manager.load().unwrap();
  /// let tokenizer = VibratoTokenizer::from_shared_dictionary(dict);
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }
}

impl Tokenize for VibratoTokenizer {
  fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizerError> {
    // worker holds lattice for analysis and calculation area.
    // Created each time
    let mut worker = self.inner.new_worker();

    worker.reset_sentence(text);
    worker.tokenize();

    debug!(text_len = text.len(), "Start morphological analysis");

    let mut morphemes = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      let surface = token.surface();
      let feature = token.feature();

      debug!(surface = %surface, ?feature, "Token");

      morphemes.push(Morpheme {
        surface: surface.to_string(),
        reading: reading_from_feature(feature).map(str::to_string),
      });
    }

    debug!(total_tokens = morphemes.len(), "Morphological analysis completed");

    Ok(morphemes)
  }
}

/// Extracts the reading field from a comma separated feature string.
///
/// Unknown words carry a shorter feature, and `*` marks an empty slot.
/// Both yield `None`.
pub fn reading_from_feature(feature: &str) -> Option<&str> {
  feature
    .split(',')
    .nth(IDX_READING)
    .filter(|reading| !reading.is_empty() && *reading != "*")
}
