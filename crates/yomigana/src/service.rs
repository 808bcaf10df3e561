// crates/yomigana/src/service.rs

//! YomiganaService: yomigana クレートの統合ファサード。
//!
//! - トークナイザープロバイダー (TokenizerProvider) - 初回利用時に辞書をロード
//! - 結果キャッシュ (ResultCache) - 構造化結果用とふりがな HTML 用の 2 つ
//! - アノテーター (Annotator)
//!
//! 処理の流れ: キャッシュ検索 → [ミス] → トークナイザー取得 → 注釈 → キャッシュ保存

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use tracing::{debug, info};

use crate::annotator::Annotator;
use crate::cache::ResultCache;
use crate::config::YomiganaConfig;
use crate::dictionary::DictionaryManager;
use crate::errors::error_definition::{CacheError, TokenizerError, YomiganaResult};
use crate::models::{FuriganaOptions, Token};
use crate::tokenizer::TokenizerProvider;

const TOKENS_CACHE: &str = "tokens";
const RUBY_CACHE: &str = "ruby";

/// yomigana クレートの統合ファサード。
///
/// プロセス（インスタンス）ごとに 1 つ作り、リクエスト間で共有する。
#[derive(Debug)]
pub struct YomiganaService {
  provider: TokenizerProvider,

  /// 構造化モードの結果（キー: 入力テキスト）
  tokens_cache: Mutex<ResultCache<Arc<Vec<Token>>>>,

  /// ふりがなモードの結果（キー: 入力テキスト）
  ruby_cache: Mutex<ResultCache<String>>,
}

impl YomiganaService {
  /// プロバイダーとキャッシュ上限から作成する
  pub fn new(provider: TokenizerProvider, cache_capacity: usize) -> Self {
    Self {
      provider,
      tokens_cache: Mutex::new(ResultCache::new(cache_capacity)),
      ruby_cache: Mutex::new(ResultCache::new(cache_capacity)),
    }
  }

  /// 設定から作成する
  ///
  /// 辞書はここではロードしない（初回リクエスト時に遅延ロード）。
  ///
  /// # エラー
  /// - 設定が不正
  /// - 辞書マネージャの構築失敗（キャッシュディレクトリー不明、ローカル辞書が無い）
  pub fn from_config(config: &YomiganaConfig) -> YomiganaResult<Self> {
    config.validate()?;

    let manager = DictionaryManager::from_config(config)?;
    info!(?manager, cache_capacity = config.cache_capacity(), "YomiganaService を構築しました");

    Ok(Self::new(
      TokenizerProvider::from_dictionary_manager(manager),
      config.cache_capacity(),
    ))
  }

  /// トークナイザーが初期化済みか
  pub fn is_ready(&self) -> bool {
    self.provider.is_initialized()
  }

  /// 構造化モード: `{surface, reading}` の列を返す
  ///
  /// 同一テキストは 2 回目以降キャッシュから返す。
  pub async fn annotate(&self, text: &str) -> YomiganaResult<Arc<Vec<Token>>> {
    let cached = lock(&self.tokens_cache, TOKENS_CACHE)?.get(text).cloned();
    if let Some(hit) = cached {
      debug!(text_len = text.len(), "構造化結果キャッシュヒット");
      return Ok(hit);
    }

    let start = Instant::now();
    let annotator = Annotator::new(self.provider.get().await?);
    let owned = text.to_string();
    let tokens = tokio::task::spawn_blocking(move || annotator.structured(&owned))
      .await
      .map_err(|e| TokenizerError::TaskFailed {
        reason: e.to_string(),
      })??;
    let tokens = Arc::new(tokens);

    lock(&self.tokens_cache, TOKENS_CACHE)?.insert(text, Arc::clone(&tokens));
    debug!(
      text_len = text.len(),
      token_count = tokens.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "構造化結果を計算しました"
    );

    Ok(tokens)
  }

  /// ふりがなモード: ルビ付き HTML を返す
  ///
  /// 同一テキストは 2 回目以降キャッシュから返す。
  pub async fn furigana(&self, text: &str, options: &FuriganaOptions) -> YomiganaResult<String> {
    let cached = lock(&self.ruby_cache, RUBY_CACHE)?.get(text).cloned();
    if let Some(hit) = cached {
      debug!(text_len = text.len(), "ふりがな結果キャッシュヒット");
      return Ok(hit);
    }

    let start = Instant::now();
    let annotator = Annotator::new(self.provider.get().await?);
    let html = annotator.furigana(text, options).await?;

    lock(&self.ruby_cache, RUBY_CACHE)?.insert(text, html.clone());
    debug!(
      text_len = text.len(),
      html_len = html.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "ふりがな結果を計算しました"
    );

    Ok(html)
  }
}

/// キャッシュのロックを取得する（汚染時はエラー）
fn lock<'a, V>(
  cache: &'a Mutex<ResultCache<V>>,
  name: &'static str,
) -> Result<MutexGuard<'a, ResultCache<V>>, CacheError> {
  cache.lock().map_err(|_| CacheError::Poisoned { cache: name })
}
