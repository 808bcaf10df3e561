//! Response Model Definition

use serde::Serialize;
use yomigana::Token;

/// Token Information (DTO)
///
/// One `{surface, reading}` pair of the structured response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDto {
  /// Surface form (string appearing in original text)
  pub surface: String,
  /// Reading (katakana), empty when the dictionary has none
  pub reading: String,
}

impl From<&Token> for TokenDto {
  fn from(token: &Token) -> Self {
    Self {
      surface: token.surface.clone(),
      reading: token.reading.clone(),
    }
  }
}
