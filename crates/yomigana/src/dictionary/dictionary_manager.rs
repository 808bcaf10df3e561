//! Dictionary Management Module
//!
//! Manages loading of vibrato-rkyv dictionary data and downloading of preset dictionaries.
//! Automatically downloads on the first run, and loads from the cache directory from the second time onwards.
//! It is also possible to load a local dictionary directly.
//!
//! `load()` performs the work on every call. Process-wide memoization is the job of
//! [`TokenizerProvider`](crate::tokenizer::TokenizerProvider), which retries after a failure.

use crate::config::YomiganaConfig;
use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Dictionary manager structure for vibrato-rkyv
#[derive(Clone)]
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Type of preset dictionary `Ipadic`, `UnidicCwj`, `UnidicCsj`, etc.
  /// Should be `None` for local dictionaries
  preset_kind: Option<PresetDictionaryKind>,

  /// Dictionary file path (local dictionaries only)
  dictionary_path: Option<PathBuf>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Returns the preset kind, `None` for a local dictionary
  pub fn preset_kind(&self) -> Option<PresetDictionaryKind> {
    self.preset_kind
  }

  /// Constructor using a preset dictionary stored under the OS cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    let cache_dir = default_cache_dir()?;
    Ok(Self::with_preset_in(preset_kind, cache_dir))
  }

  /// Constructor using a preset dictionary stored under `cache_dir`
  pub fn with_preset_in(preset_kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      preset_kind: Some(preset_kind),
      dictionary_path: None,
    }
  }

  /// Constructor using a local dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      let s = path.display().to_string();
      return Err(DictionaryError::DictionaryNotFound(s));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      preset_kind: None,
      dictionary_path: Some(path),
    })
  }

  /// Builds the manager described by the `[dictionary]` section.
  ///
  /// A local `path` wins over `preset`; `cache_dir` overrides the OS default.
  pub fn from_config(config: &YomiganaConfig) -> Result<Self, DictionaryError> {
    if let Some(path) = config.dictionary_path() {
      return Self::from_local_path(path);
    }

    match config.dictionary_cache_dir() {
      Some(dir) => Ok(Self::with_preset_in(config.dictionary_preset(), dir)),
      None => Self::with_preset(config.dictionary_preset()),
    }
  }

  /// Load dictionary
  ///
  /// Blocking. Downloads the preset on first use, reads it from the cache directory afterwards.
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    let dict = match (&self.dictionary_path, self.preset_kind) {
      (Some(path), _) => Self::load_from_local_path(path)?,
      (None, Some(preset_kind)) => self.load_from_preset(preset_kind)?,
      _ => {
        return Err(DictionaryError::InvalidPathOrInvalidPresetKind(
          self.cache_dir.clone(),
          self.preset_kind,
        ));
      }
    };

    info!(manager = ?self, "Dictionary loaded");
    Ok(Arc::new(dict))
  }

  /// Loads a dictionary from a local dictionary file
  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  /// Downloads (first run) or reads (afterwards) a preset dictionary
  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    let dict_dir = self.cache_dir.join(preset_kind.name());

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/yomigana/dict`                      |
/// | macOS   | `~/Library/Caches/yomigana/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\yomigana\dict` |
fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("yomigana").join("dict"))
}

impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("preset_kind", &self.preset_kind)
      .field("dictionary_path", &self.dictionary_path)
      .finish()
  }
}
