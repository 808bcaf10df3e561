//! データモデル定義

use std::str::FromStr;

use serde::Serialize;

use crate::errors::OptionError;

/// トークナイザーが返す 1 形態素
///
/// 辞書に読みが無い（未知語など）場合 `reading` は `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
  /// 表層形（元テキスト中の文字列）
  pub surface: String,
  /// 読み（カタカナ）
  pub reading: Option<String>,
}

impl Morpheme {
  /// 読み付きの形態素を作成
  pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
    Self {
      surface: surface.into(),
      reading: Some(reading.into()),
    }
  }

  /// 読み無しの形態素を作成
  pub fn without_reading(surface: impl Into<String>) -> Self {
    Self {
      surface: surface.into(),
      reading: None,
    }
  }
}

/// 構造化モードの注釈結果 1 件
///
/// 読みが無い場合は空文字列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
  /// 表層形
  pub surface: String,
  /// 読み（カタカナ、無ければ空文字列）
  pub reading: String,
}

impl From<Morpheme> for Token {
  fn from(morpheme: Morpheme) -> Self {
    Self {
      surface: morpheme.surface,
      reading: morpheme.reading.unwrap_or_default(),
    }
  }
}

/// 注釈モード（現状 `furigana` のみ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnnotationMode {
  /// ルビ付き HTML
  #[default]
  Furigana,
}

impl FromStr for AnnotationMode {
  type Err = OptionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "furigana" => Ok(Self::Furigana),
      _ => Err(OptionError::UnsupportedMode(s.to_string())),
    }
  }
}

/// ルビに使う文字種（現状 `hiragana` のみ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KanaTarget {
  /// ひらがな
  #[default]
  Hiragana,
}

impl FromStr for KanaTarget {
  type Err = OptionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "hiragana" => Ok(Self::Hiragana),
      _ => Err(OptionError::UnsupportedTarget(s.to_string())),
    }
  }
}

/// ローマ字方式（現状 `hepburn` のみ。名前の予約のみで変換には未使用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RomajiSystem {
  /// ヘボン式
  #[default]
  Hepburn,
}

impl FromStr for RomajiSystem {
  type Err = OptionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "hepburn" => Ok(Self::Hepburn),
      _ => Err(OptionError::UnsupportedRomajiSystem(s.to_string())),
    }
  }
}

/// ふりがなモードのオプション一式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuriganaOptions {
  /// 注釈モード
  pub mode: AnnotationMode,
  /// ルビの文字種
  pub to: KanaTarget,
  /// ローマ字方式
  pub romaji_system: RomajiSystem,
}

impl FuriganaOptions {
  /// リクエストの生の値からオプションを組み立てる
  ///
  /// 省略された値は既定値。検証は mode → to → romajiSystem の順で行い、
  /// 最初に受理できなかった値のエラーを返す。
  pub fn parse(
    mode: Option<&str>,
    to: Option<&str>,
    romaji_system: Option<&str>,
  ) -> Result<Self, OptionError> {
    Ok(Self {
      mode: mode.map(str::parse::<AnnotationMode>).transpose()?.unwrap_or_default(),
      to: to.map(str::parse::<KanaTarget>).transpose()?.unwrap_or_default(),
      romaji_system: romaji_system.map(str::parse::<RomajiSystem>).transpose()?.unwrap_or_default(),
    })
  }
}
