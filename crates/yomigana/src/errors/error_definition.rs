//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// 設定（YomiganaConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// cache.capacity < 1
  #[error("cache.capacity は 1 以上である必要があります: actual={actual}")]
  InvalidCacheCapacity {
    /// 実際に指定された値
    actual: usize,
  },

  /// 辞書プリセット名が不正
  #[error("不明な辞書プリセットです: {name}. 有効な値: ipadic, unidic-cwj, unidic-csj")]
  UnknownPreset {
    /// 指定されたプリセット名
    name: String,
  },

  /// 数値として解釈できない設定値
  #[error("{key} の値が不正です: value={value}")]
  InvalidNumber {
    /// 設定キー
    key: String,
    /// 指定された値
    value: String,
  },

  /// dictionary.path が存在しない
  #[error("dictionary.path が見つかりません: path={path:?}")]
  DictionaryPathNotFound {
    /// 指定されたパス
    path: PathBuf,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// 辞書関連のエラー
/// Vibrato では mecab, ipadic, unidic 等の辞書を使用可能
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// 辞書パスが不正または辞書種別が不正
  #[error("辞書パスまたは辞書種別が不正です: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// トークナイザー関連エラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TokenizerError {
  /// 辞書起因のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),

  /// 入力テキストが不正
  #[error("トークナイズ対象の入力テキストが不正: {reason}")]
  InvalidInput {
    /// 不正の理由
    reason: String,
  },

  /// ブロッキングタスクが完了しなかった（panic / キャンセル）
  #[error("トークナイズ処理の実行に失敗しました: {reason}")]
  TaskFailed {
    /// 失敗の理由
    reason: String,
  },
}

/// ふりがなオプションの検証エラー
///
/// 値は受理できなかった入力そのもの。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionError {
  /// `mode` が "furigana" 以外
  #[error("Unsupported mode: {0}")]
  UnsupportedMode(String),

  /// `to` が "hiragana" 以外
  #[error("Unsupported target: {0}")]
  UnsupportedTarget(String),

  /// `romajiSystem` が "hepburn" 以外
  #[error("Unsupported romaji system: {0}")]
  UnsupportedRomajiSystem(String),
}

/// 結果キャッシュ関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CacheError {
  /// 別スレッドの panic によりロックが汚染された
  #[error("結果キャッシュのロックが汚染されています: {cache}")]
  Poisoned {
    /// キャッシュ名
    cache: &'static str,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `YomiganaResult<T>` = `Result<T, YomiganaError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum YomiganaError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// トークナイザー関連エラー
  #[error(transparent)]
  Tokenizer(#[from] TokenizerError),

  /// オプション検証エラー
  #[error(transparent)]
  Option(#[from] OptionError),

  /// キャッシュ関連エラー
  #[error(transparent)]
  Cache(#[from] CacheError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// yomigana クレートの標準 Result 型エイリアス
pub type YomiganaResult<T> = Result<T, YomiganaError>;
