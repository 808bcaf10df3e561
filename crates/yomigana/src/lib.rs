//! yomigana ふりがな生成ライブラリー
//!
//! vibrato-rkyv による形態素解析の結果から、読み付きトークン列または
//! `<ruby>` 付き HTML を生成する

/// アノテーターモジュール - トークン列を構造化結果・ルビ HTML へ変換
pub mod annotator;

/// キャッシュモジュール - 入力テキスト単位の上限付き結果キャッシュ
pub mod cache;

/// 設定モジュール - YomiganaConfig, DictionaryPreset等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - YomiganaError, YomiganaResult等のエラー型を定義
pub mod errors;

/// データモデルモジュール - Token, FuriganaOptions等のデータ構造を定義
pub mod models;

/// サービスモジュール - YomiganaService等の上位レベルAPIを提供
pub mod service;

/// トークナイザーモジュール - vibrato-rkyvを用いた形態素解析と遅延初期化プロバイダー
pub mod tokenizer;

/// 再エクスポート
pub use config::{DictionaryPreset, YomiganaConfig};
pub use errors::{YomiganaError, YomiganaResult};
pub use models::{FuriganaOptions, Token};
pub use service::YomiganaService;
