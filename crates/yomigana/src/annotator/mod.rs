//! Annotator
//!
//! Turns tokenizer output into either structured `{surface, reading}` pairs or
//! an HTML string where every kanji-bearing token is wrapped in `<ruby>` markup.

pub mod kana;

use std::sync::Arc;

use tracing::debug;

use crate::errors::TokenizerError;
use crate::models::{FuriganaOptions, KanaTarget, Morpheme, Token};
use crate::tokenizer::Tokenize;

pub use kana::{contains_kanji, is_kanji, katakana_to_hiragana};

/// Annotates text with a shared tokenizer
#[derive(Clone)]
pub struct Annotator {
  tokenizer: Arc<dyn Tokenize>,
}

impl Annotator {
  /// Creates an annotator over `tokenizer`
  pub fn new(tokenizer: Arc<dyn Tokenize>) -> Self {
    Self { tokenizer }
  }

  /// Structured mode: tokenizes the whole text once.
  ///
  /// Blocking; run it off the async executor.
  pub fn structured(&self, text: &str) -> Result<Vec<Token>, TokenizerError> {
    let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.into_iter().map(Token::from).collect();
    debug!(token_count = tokens.len(), "Structured annotation done");
    Ok(tokens)
  }

  /// Furigana mode: each line is tokenized on its own blocking task and the
  /// results are joined back in the original line order.
  ///
  /// Lines never share tokenizer context. Any failing line fails the whole text.
  pub async fn furigana(
    &self,
    text: &str,
    options: &FuriganaOptions,
  ) -> Result<String, TokenizerError> {
    let target = options.to;

    let handles: Vec<_> = text
      .split('\n')
      .map(|line| {
        let tokenizer = Arc::clone(&self.tokenizer);
        let line = line.to_string();
        tokio::task::spawn_blocking(move || annotate_line(tokenizer.as_ref(), &line, target))
      })
      .collect();

    // Blocking tasks cannot be cancelled, so every line is awaited before the
    // first error (in line order) is returned.
    let line_count = handles.len();
    let mut lines = Vec::with_capacity(line_count);
    let mut first_error = None;
    for handle in handles {
      let result = handle.await.map_err(|e| TokenizerError::TaskFailed {
        reason: e.to_string(),
      });
      match result.and_then(|line| line) {
        Ok(line) => lines.push(line),
        Err(e) => {
          first_error.get_or_insert(e);
        }
      }
    }

    if let Some(e) = first_error {
      debug!(line_count, error = %e, "Furigana annotation failed");
      return Err(e);
    }

    debug!(line_count, "Furigana annotation done");
    Ok(lines.join("\n"))
  }
}

/// Tokenizes a single line and renders it as ruby HTML
pub fn annotate_line(
  tokenizer: &dyn Tokenize,
  line: &str,
  target: KanaTarget,
) -> Result<String, TokenizerError> {
  if line.is_empty() {
    return Ok(String::new());
  }
  let morphemes = tokenizer.tokenize(line)?;
  Ok(render_ruby(&morphemes, target))
}

/// Renders morphemes as HTML.
///
/// Tokens without kanji are emitted verbatim, empty surfaces are dropped, and
/// kanji tokens become `<ruby>{surface}<rt>{reading}</rt></ruby>`.
pub fn render_ruby(morphemes: &[Morpheme], target: KanaTarget) -> String {
  let mut html = String::new();

  for morpheme in morphemes {
    let surface = morpheme.surface.as_str();
    if surface.is_empty() {
      continue;
    }
    if !contains_kanji(surface) {
      html.push_str(surface);
      continue;
    }

    let reading = morpheme.reading.as_deref().unwrap_or_default();
    let rt = match target {
      KanaTarget::Hiragana => katakana_to_hiragana(reading),
    };

    html.push_str("<ruby>");
    html.push_str(surface);
    html.push_str("<rt>");
    html.push_str(&rt);
    html.push_str("</rt></ruby>");
  }

  html
}
