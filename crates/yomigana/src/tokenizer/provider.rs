//! Tokenizer Provider
//!
//! Lazily builds the process-wide tokenizer. The first `get()` triggers the
//! dictionary load; concurrent callers wait on the same in-flight initialization.
//! A failed initialization is not stored, so the next `get()` retries it.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::{Tokenize, VibratoTokenizer};
use crate::dictionary::DictionaryManager;
use crate::errors::TokenizerError;

/// Blocking function that builds a tokenizer (dictionary load etc.)
pub type TokenizerLoader =
  Arc<dyn Fn() -> Result<Arc<dyn Tokenize>, TokenizerError> + Send + Sync + 'static>;

/// Memoized, lazily initialized tokenizer handle
pub struct TokenizerProvider {
  loader: TokenizerLoader,
  cell: OnceCell<Arc<dyn Tokenize>>,
}

impl TokenizerProvider {
  /// Creates a provider around an arbitrary loader.
  ///
  /// The loader runs on the blocking thread pool.
  pub fn new<F>(loader: F) -> Self
  where
    F: Fn() -> Result<Arc<dyn Tokenize>, TokenizerError> + Send + Sync + 'static,
  {
    Self {
      loader: Arc::new(loader),
      cell: OnceCell::new(),
    }
  }

  /// Creates a provider that loads a vibrato dictionary through `manager`
  pub fn from_dictionary_manager(manager: DictionaryManager) -> Self {
    Self::new(move || {
      let dict = manager.load()?;
      let tokenizer: Arc<dyn Tokenize> = Arc::new(VibratoTokenizer::from_shared_dictionary(dict));
      Ok(tokenizer)
    })
  }

  /// Creates an already initialized provider
  pub fn with_tokenizer(tokenizer: Arc<dyn Tokenize>) -> Self {
    let ready = Arc::clone(&tokenizer);
    Self {
      loader: Arc::new(move || Ok(Arc::clone(&ready))),
      cell: OnceCell::new_with(Some(tokenizer)),
    }
  }

  /// Returns the shared tokenizer, initializing it on first use.
  ///
  /// # Errors
  /// The loader's error, returned to every caller that waited on the failed attempt.
  pub async fn get(&self) -> Result<Arc<dyn Tokenize>, TokenizerError> {
    let tokenizer = self.cell.get_or_try_init(|| self.initialize()).await?;
    Ok(Arc::clone(tokenizer))
  }

  /// Whether a tokenizer has been built successfully
  pub fn is_initialized(&self) -> bool {
    self.cell.initialized()
  }

  async fn initialize(&self) -> Result<Arc<dyn Tokenize>, TokenizerError> {
    let loader = Arc::clone(&self.loader);
    let start = Instant::now();
    info!("Initializing tokenizer");

    let result = tokio::task::spawn_blocking(move || loader()).await.map_err(|e| {
      TokenizerError::TaskFailed {
        reason: e.to_string(),
      }
    })?;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    match &result {
      Ok(_) => info!(elapsed_ms, "Tokenizer initialized"),
      Err(e) => warn!(error = %e, elapsed_ms, "Tokenizer initialization failed, will retry on next request"),
    }

    result
  }
}

impl fmt::Debug for TokenizerProvider {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TokenizerProvider")
      .field("initialized", &self.is_initialized())
      .finish()
  }
}
