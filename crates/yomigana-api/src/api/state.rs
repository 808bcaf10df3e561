//! API State Definition

use std::sync::Arc;

use yomigana::YomiganaService;

use crate::config::Config;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Annotation service (tokenizer provider + result caches)
  ///
  /// - Production: `Arc::new(YomiganaService::from_config(&config.yomigana)?)`
  /// - Test: `YomiganaService::new(TokenizerProvider::with_tokenizer(stub), ..)`
  pub service: Arc<YomiganaService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<YomiganaService>) -> Self {
    Self { config, service }
  }
}
