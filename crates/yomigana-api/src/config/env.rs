//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use yomigana::config::{CacheConfig, DEFAULT_CACHE_CAPACITY, DictionaryConfig};
use yomigana::errors::ConfigError;
use yomigana::{DictionaryPreset, YomiganaConfig};

use super::constants::{
  BODY_OVERHEAD, DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_PRESET_DICT, JSON_ESCAPE_FACTOR,
  MAX_TEXT_LENGTH, env_keys,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5530")
  pub bind_addr: String,
  /// Maximum accepted text length in bytes
  pub max_text_length: usize,
  /// Default log filter when `RUST_LOG` is unset
  pub log_level: String,
  /// Library configuration (dictionary source, cache capacity)
  pub yomigana: YomiganaConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      max_text_length: MAX_TEXT_LENGTH,
      log_level: DEFAULT_LOG_LEVEL.to_string(),
      yomigana: YomiganaConfig::default(),
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// `remove_var` / `set_var` are unsafe in Rust 2024, so tests pass a map lookup here
  /// instead of touching the process environment.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(env_keys::BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let preset_str =
      lookup(env_keys::PRESET_DICT).unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
    let preset = DictionaryPreset::from_str(&preset_str).map_err(config_error)?;

    let capacity = parse_number(&lookup, env_keys::CACHE_CAPACITY, DEFAULT_CACHE_CAPACITY)?;
    let max_text_length = parse_number(&lookup, env_keys::MAX_TEXT_LENGTH, MAX_TEXT_LENGTH)?;

    let log_level = lookup(env_keys::LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let yomigana = YomiganaConfig {
      dictionary: DictionaryConfig {
        preset,
        cache_dir: lookup(env_keys::DICT_CACHE_DIR).map(PathBuf::from),
        path: lookup(env_keys::DICT_PATH).map(PathBuf::from),
      },
      cache: CacheConfig { capacity },
    };

    Ok(Self {
      bind_addr,
      max_text_length,
      log_level,
      yomigana,
    })
  }

  /// リクエストボディの上限（バイト）
  ///
  /// `max_text_length` のテキストが全文エスケープされても収まる大きさ。
  /// これを超えるボディは 413 になり、それ以下は `check_length` で判定する。
  #[must_use]
  pub fn body_limit(&self) -> usize {
    self
      .max_text_length
      .saturating_mul(JSON_ESCAPE_FACTOR)
      .saturating_add(BODY_OVERHEAD)
  }
}

fn parse_number<F>(lookup: &F, key: &str, default: usize) -> crate::errors::Result<usize>
where
  F: Fn(&str) -> Option<String>,
{
  let Some(value) = lookup(key) else {
    return Ok(default);
  };

  let parsed = value.trim().parse::<usize>();
  parsed.map_err(|_| {
    config_error(ConfigError::InvalidNumber {
      key: key.to_string(),
      value,
    })
  })
}

fn config_error(err: ConfigError) -> ApiError {
  ApiError::config(err.to_string())
}
