//! tokenizer モジュール
//!
//! 形態素解析の抽象（[`Tokenize`]）、vibrato-rkyv による実装、
//! プロセス内で 1 度だけ初期化するプロバイダーを提供する。
pub mod provider;
pub mod vibrato_tokenizer;

use crate::errors::TokenizerError;
use crate::models::Morpheme;

/// 再エクスポート
pub use provider::{TokenizerLoader, TokenizerProvider};
pub use vibrato_tokenizer::{VibratoTokenizer, reading_from_feature};

/// 形態素解析の共通インターフェース
///
/// 本番は [`VibratoTokenizer`]、テストでは辞書を使わないスタブに差し替える。
pub trait Tokenize: Send + Sync {
  /// テキストを形態素列に分割する
  ///
  /// # Errors
  /// 解析に失敗した場合
  fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizerError>;
}

#[cfg(test)]
pub(crate) mod stub;
