//! yomigana-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use yomigana::YomiganaService;
use yomigana_api::ApiError;
use yomigana_api::api::AppState;
use yomigana_api::api::run_server;
use yomigana_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG があれば優先）
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    preset = ?config.yomigana.dictionary.preset,
    dictionary_path = ?config.yomigana.dictionary.path,
    cache_capacity = config.yomigana.cache.capacity,
    "設定を読み込みました"
  );

  // サービスの初期化（辞書は初回リクエスト時にロード）
  let service = Arc::new(YomiganaService::from_config(&config.yomigana)?);

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
