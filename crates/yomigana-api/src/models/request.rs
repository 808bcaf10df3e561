//! リクエストモデル定義

use serde::Deserialize;
use serde_json::Value;
use yomigana::FuriganaOptions;

use crate::errors::{ApiError, Result};

/// 構造化注釈リクエスト（`POST /annotate`）
#[derive(Debug, Default, Deserialize)]
pub struct AnnotateRequest {
  /// 注釈対象のテキスト
  ///
  /// 文字列以外も受け取り、検証で判定する。
  #[serde(default)]
  pub text: Option<Value>,
}

impl AnnotateRequest {
  /// 検証済みのテキストを返す（前後の空白は除去）
  ///
  /// # Errors
  /// - 欠落 / null / 空文字列 / `false` / `0`: `MissingText`
  /// - 空白のみ: `EmptyText`
  /// - それ以外の文字列でない値: `Internal`
  pub fn cleaned_text(&self) -> Result<&str> {
    let text = match &self.text {
      None | Some(Value::Null) | Some(Value::Bool(false)) => return Err(ApiError::MissingText),
      Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return Err(ApiError::MissingText),
      Some(Value::String(text)) if text.is_empty() => return Err(ApiError::MissingText),
      Some(Value::String(text)) => text,
      Some(_) => return Err(ApiError::internal("'text' must be a string")),
    };

    let cleaned = text.trim();
    if cleaned.is_empty() {
      return Err(ApiError::EmptyText);
    }

    Ok(cleaned)
  }
}

/// ふりがなリクエスト（`POST /furigana`）
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuriganaRequest {
  /// 注釈対象のテキスト（JSON 上のキーは `str`）
  ///
  /// 文字列以外も受け取り、検証で弾く。
  #[serde(rename = "str", default)]
  pub text: Option<Value>,
  /// `"furigana"` のみ対応
  #[serde(default)]
  pub mode: Option<String>,
  /// `"hiragana"` のみ対応
  #[serde(default)]
  pub to: Option<String>,
  /// `"hepburn"` のみ対応
  #[serde(default)]
  pub romaji_system: Option<String>,
}

impl FuriganaRequest {
  /// 検証済みのテキストとオプションを返す
  ///
  /// テキストはトリムしない（行構造をそのまま保つ）。
  ///
  /// # Errors
  /// - `str` が欠落、または文字列でない: `InvalidStr`
  /// - 未対応のオプション値: `UnsupportedMode` / `UnsupportedTarget` / `UnsupportedRomajiSystem`
  pub fn validate(&self) -> Result<(&str, FuriganaOptions)> {
    let Some(Value::String(text)) = &self.text else {
      return Err(ApiError::InvalidStr);
    };

    let options = FuriganaOptions::parse(
      self.mode.as_deref(),
      self.to.as_deref(),
      self.romaji_system.as_deref(),
    )?;

    Ok((text.as_str(), options))
  }
}
