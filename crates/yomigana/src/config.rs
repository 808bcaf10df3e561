// crates/yomigana/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Default capacity of each result cache (entries).
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Top-level configuration for yomigana.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YomiganaConfig {
  /// [dictionary] section
  #[serde(default)]
  pub dictionary: DictionaryConfig,
  /// [cache] section
  #[serde(default)]
  pub cache: CacheConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  #[serde(default)]
  pub preset: DictionaryPreset,
  /// Dictionary cache directory for preset downloads.
  ///
  /// `None` lets `DictionaryManager` pick the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
  /// Compiled local dictionary file. Takes precedence over `preset` when set.
  #[serde(default)]
  pub path: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` belongs to vibrato-rkyv and has no `Deserialize`
/// implementation (orphan rule), so configuration uses this enum and converts
/// with `.into()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest. Readings match what kuromoji-style tokenizers emit.
  #[default]
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl FromStr for DictionaryPreset {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(ConfigError::UnknownPreset { name: s.to_string() }),
    }
  }
}

/// [cache] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
  /// Maximum number of entries per result cache
  #[serde(default = "default_cache_capacity")]
  pub capacity: usize,
}

fn default_cache_capacity() -> usize {
  DEFAULT_CACHE_CAPACITY
}

impl Default for CacheConfig {
  fn default() -> Self {
    Self {
      capacity: DEFAULT_CACHE_CAPACITY,
    }
  }
}

// ===== Accessor Methods =====

impl YomiganaConfig {
  /// Returns the preset dictionary type to pass to DictionaryManager.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.dictionary.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.dictionary.cache_dir.as_deref()
  }

  /// Returns the local dictionary file, if one is configured.
  pub fn dictionary_path(&self) -> Option<&Path> {
    self.dictionary.path.as_deref()
  }

  /// Returns the result cache capacity.
  pub fn cache_capacity(&self) -> usize {
    self.cache.capacity
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `cache.capacity` >= 1
  /// - `dictionary.path` points at an existing file when given
  /// - `dictionary.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.cache.capacity < 1 {
      return Err(ConfigError::InvalidCacheCapacity {
        actual: self.cache.capacity,
      });
    }

    if let Some(path) = &self.dictionary.path
      && !path.is_file()
    {
      return Err(ConfigError::DictionaryPathNotFound { path: path.clone() });
    }

    if let Some(cache_dir) = &self.dictionary.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// ===== DictionaryPreset (config) -> PresetDictionaryKind (vibrato-rkyv) =====

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}
