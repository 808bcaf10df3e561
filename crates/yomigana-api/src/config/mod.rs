//! Config module

mod constants;
mod env;

pub use constants::{
  BODY_OVERHEAD, DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_PRESET_DICT, JSON_ESCAPE_FACTOR,
  MAX_TEXT_LENGTH, env_keys,
};
pub use env::Config;
