//! Dictionary-free tokenizer for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::Tokenize;
use crate::errors::TokenizerError;
use crate::models::Morpheme;

/// Text containing this marker makes the stub fail
pub(crate) const FAIL_MARKER: &str = "💥";

/// Greedy longest-match tokenizer over a tiny fixed lexicon.
///
/// Characters outside the lexicon become one-character morphemes without a reading.
pub(crate) struct StubTokenizer {
  lexicon: Vec<(&'static str, &'static str)>,
  delays: Vec<(&'static str, Duration)>,
  calls: AtomicUsize,
}

impl Default for StubTokenizer {
  fn default() -> Self {
    Self {
      lexicon: vec![
        ("今日", "キョウ"),
        ("明日", "アシタ"),
        ("は", "ハ"),
        ("晴れ", "ハレ"),
        ("雨", "アメ"),
        ("です", "デス"),
        ("漢字", "カンジ"),
        ("東京", "トウキョウ"),
        ("人々", "ヒトビト"),
        ("の", "ノ"),
        ("。", "。"),
      ],
      delays: Vec::new(),
      calls: AtomicUsize::new(0),
    }
  }
}

impl StubTokenizer {
  /// Sleeps for `delay` whenever the input contains `needle`
  pub(crate) fn with_delay(mut self, needle: &'static str, delay: Duration) -> Self {
    self.delays.push((needle, delay));
    self
  }

  /// Number of `tokenize` calls so far
  pub(crate) fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

impl Tokenize for StubTokenizer {
  fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizerError> {
    self.calls.fetch_add(1, Ordering::SeqCst);

    if text.contains(FAIL_MARKER) {
      return Err(TokenizerError::InvalidInput {
        reason: "stub failure".to_string(),
      });
    }

    for (needle, delay) in &self.delays {
      if text.contains(needle) {
        std::thread::sleep(*delay);
      }
    }

    let mut morphemes = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
      let matched = self
        .lexicon
        .iter()
        .filter(|(surface, _)| rest.starts_with(surface))
        .max_by_key(|(surface, _)| surface.len());

      match matched {
        Some((surface, reading)) => {
          morphemes.push(Morpheme::new(*surface, *reading));
          rest = &rest[surface.len()..];
        }
        None => {
          morphemes.push(Morpheme::without_reading(ch.to_string()));
          rest = &rest[ch.len_utf8()..];
        }
      }
    }

    Ok(morphemes)
  }
}
