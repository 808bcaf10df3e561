//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 10MB までのテキストを許可する。
/// 大きなテキストの処理によるリソース枯渇を防ぐための制限。
pub const MAX_TEXT_LENGTH: usize = 10_000_000;

/// JSON エスケープで 1 バイトが最大何バイトになるか（`\u0000` 形式）
pub const JSON_ESCAPE_FACTOR: usize = 6;

/// テキスト以外（キー名、オプション、空白）に許すボディのバイト数
pub const BODY_OVERHEAD: usize = 64 * 1024;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の標準ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5530";

/// デフォルトの辞書プリセット名
///
/// 読みの形式が kuromoji 系と揃う IPADIC をデフォルトとして使用。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";

/// デフォルトのログレベル（`RUST_LOG` 未設定時）
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 環境変数名
pub mod env_keys {
  /// バインドアドレス
  pub const BIND_ADDR: &str = "YOMIGANA_API_BASE_URL";
  /// 辞書プリセット
  pub const PRESET_DICT: &str = "YOMIGANA_PRESET_DICT";
  /// ローカル辞書ファイル
  pub const DICT_PATH: &str = "YOMIGANA_DICT_PATH";
  /// 辞書キャッシュディレクトリー
  pub const DICT_CACHE_DIR: &str = "YOMIGANA_DICT_CACHE_DIR";
  /// 結果キャッシュの上限件数
  pub const CACHE_CAPACITY: &str = "YOMIGANA_CACHE_CAPACITY";
  /// 入力テキストの最大長
  pub const MAX_TEXT_LENGTH: &str = "YOMIGANA_MAX_TEXT_LENGTH";
  /// ログレベル
  pub const LOG_LEVEL: &str = "YOMIGANA_LOG_LEVEL";
}
